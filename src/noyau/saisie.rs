//! Accumulateur de saisie : texte de l’opérande en cours + drapeau “repartir à zéro”.
//!
//! Contrats :
//! - jamais vide après `default()` / `clear()` (défaut "0") ;
//! - au plus un point décimal ;
//! - le drapeau est levé par le dispatcher après un calcul et consommé
//!   par le prochain chiffre ou point.
//!
//! Aucune borne de longueur ici : c’est l’hôte qui en impose une.

use tracing::trace;

pub const DEFAUT: &str = "0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Saisie {
    texte: String,
    reinit: bool,
}

impl Default for Saisie {
    fn default() -> Self {
        Self {
            texte: DEFAUT.to_string(),
            reinit: false,
        }
    }
}

impl Saisie {
    pub fn texte(&self) -> &str {
        &self.texte
    }

    #[cfg(test)]
    pub fn reinit(&self) -> bool {
        self.reinit
    }

    pub fn est_vide(&self) -> bool {
        self.texte.is_empty()
    }

    /// Chiffre '0'..='9'. Tout autre caractère est ignoré.
    pub fn append_digit(&mut self, chiffre: char) {
        if !chiffre.is_ascii_digit() {
            trace!(?chiffre, "caractère non chiffre ignoré");
            return;
        }

        if self.texte == DEFAUT || self.reinit {
            self.texte.clear();
            self.reinit = false;
        }
        self.texte.push(chiffre);
    }

    pub fn append_decimal_point(&mut self) {
        // après un calcul, ou opérande vidé par une demande d’opération
        if self.reinit || self.texte.is_empty() {
            self.texte = "0.".to_string();
            self.reinit = false;
            return;
        }

        if self.texte.contains('.') {
            trace!(texte = %self.texte, "second point ignoré");
            return;
        }
        self.texte.push('.');
    }

    /// DEL : retire le dernier caractère, plancher "0".
    pub fn delete_last(&mut self) {
        self.texte.pop();
        if self.texte.is_empty() {
            self.texte.push_str(DEFAUT);
        }
    }

    /// Remet "0". Le drapeau n’est pas touché.
    pub fn clear(&mut self) {
        self.texte.clear();
        self.texte.push_str(DEFAUT);
    }

    /* ------------------------ Transitions pilotées par le dispatcher ------------------------ */

    /// Vide l’opérande (il part en “opérande précédent”) et rend son texte.
    pub(crate) fn prendre(&mut self) -> String {
        std::mem::take(&mut self.texte)
    }

    /// Dépose un résultat : le prochain chiffre repartira de zéro.
    pub(crate) fn deposer_resultat(&mut self, texte: String) {
        self.texte = texte;
        self.reinit = true;
    }
}
