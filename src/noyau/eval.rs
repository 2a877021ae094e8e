//! Noyau — évaluateur (accumulateur + dispatcher + projection)
//!
//! saisie -> demande d’opération (pli éventuel) -> calcul -> texte résultat
//!
//! Contrats :
//! - opérande précédent et opérateur vivent ENSEMBLE (`EnAttente`) : posés et
//!   effacés en une seule transition ;
//! - évaluation strictement gauche -> droite, sans priorité (2 + 3 * 4 = 20) ;
//! - un opérateur unaire calcule dès la demande, sur l’opérande saisi ;
//! - aucune erreur remontée : les demandes incomplètes sont des no-op, les
//!   domaines invalides donnent Infinity / NaN dans le texte.

use tracing::{debug, trace};

use super::format::{est_special, format_resultat, lire_operande};
use super::operateur::Operateur;
use super::saisie::Saisie;

/// Opération en attente : l’opérande capturé + l’opérateur demandé.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnAttente {
    pub operande: String,
    pub operateur: Operateur,
}

/// Ce que l’hôte affiche : ligne courante + ligne “expression en attente”.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affichage {
    pub courant: String,
    pub expression: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluateur {
    saisie: Saisie,
    attente: Option<EnAttente>,
}

impl Evaluateur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Accumulateur ------------------------ */

    pub fn append_digit(&mut self, chiffre: char) {
        self.saisie.append_digit(chiffre);
    }

    pub fn append_decimal_point(&mut self) {
        self.saisie.append_decimal_point();
    }

    pub fn delete_last(&mut self) {
        self.saisie.delete_last();
    }

    /// Retour à l’état initial (sauf drapeau de saisie, inchangé).
    pub fn clear(&mut self) {
        self.saisie.clear();
        if let Some(a) = self.attente.take() {
            debug!(operande = %a.operande, operateur = %a.operateur, "opération abandonnée");
        }
    }

    /* ------------------------ Dispatcher ------------------------ */

    pub fn request_operation(&mut self, op: Operateur) {
        if self.saisie.est_vide() {
            trace!(%op, "pas d’opérande courant, demande ignorée");
            return;
        }

        // pli : on résout l’opération en attente avant d’accepter la nouvelle
        if self.attente.is_some() {
            debug!(%op, "pli de l’opération en attente");
            self.compute();
        }

        let operande = self.saisie.prendre();
        debug!(%operande, %op, "opération en attente");
        self.attente = Some(EnAttente {
            operande,
            operateur: op,
        });

        if op.est_unaire() {
            self.compute();
        }
    }

    /// Résout l’opération en attente. No-op si rien n’est en attente.
    ///
    /// Un opérande illisible vaut NaN et le calcul a lieu quand même :
    /// le NaN se propage dans le texte du résultat.
    pub fn compute(&mut self) {
        let Some(EnAttente {
            operande,
            operateur,
        }) = self.attente.take()
        else {
            trace!("rien en attente, calcul ignoré");
            return;
        };

        let gauche = lire_operande(&operande);
        let droite = if operateur.est_unaire() {
            f64::NAN
        } else {
            lire_operande(self.saisie.texte())
        };

        let resultat = operateur.appliquer(gauche, droite);
        let texte = format_resultat(resultat);
        debug!(%operande, %operateur, droite = %self.saisie.texte(), resultat = %texte, "calcul");

        self.saisie.deposer_resultat(texte);
    }

    /* ------------------------ Projection (lecture seule) ------------------------ */

    pub fn current_text(&self) -> &str {
        self.saisie.texte()
    }

    /// "" si rien en attente, sinon "<opérande> <opérateur>".
    pub fn pending_expression_text(&self) -> String {
        match &self.attente {
            Some(a) => format!("{} {}", a.operande, a.operateur),
            None => String::new(),
        }
    }

    pub fn affichage(&self) -> Affichage {
        Affichage {
            courant: self.current_text().to_string(),
            expression: self.pending_expression_text(),
        }
    }

    /// Vrai si une opération binaire attend son second opérande.
    pub fn en_attente(&self) -> bool {
        self.attente.is_some()
    }

    #[cfg(test)]
    pub fn previous_text(&self) -> &str {
        self.attente.as_ref().map_or("", |a| a.operande.as_str())
    }

    pub fn pending_operator(&self) -> Option<Operateur> {
        self.attente.as_ref().map(|a| a.operateur)
    }

    #[cfg(test)]
    pub fn reinit(&self) -> bool {
        self.saisie.reinit()
    }

    /// Vrai si la ligne courante est un résultat non fini (Infinity, NaN…).
    pub fn resultat_invalide(&self) -> bool {
        est_special(self.current_text())
    }
}
