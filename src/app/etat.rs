//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder UN évaluateur (pas de singleton global) et lui transmettre les
//! touches une par une. Une touche = une transition du noyau.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `noyau::Evaluateur`.
//! - La borne de longueur de saisie est imposée ICI (le noyau n’en a pas).

use eframe::egui;
use tracing::trace;

use crate::config::Config;
use crate::noyau::{Affichage, Evaluateur, Operateur};

/// Une entrée discrète de l’hôte (bouton ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operation(Operateur),
    Egal,
    Supprimer,
    Effacer,
}

impl Touche {
    /// Texte tapé au clavier -> touche. `None` si le texte ne correspond à rien.
    pub fn depuis_texte(texte: &str) -> Option<Touche> {
        let mut chars = texte.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            // pas de noms de fonctions au clavier : un caractère à la fois
            return None;
        }
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' | ',' => Some(Touche::Point),
            '=' => Some(Touche::Egal),
            _ => c
                .to_string()
                .parse::<Operateur>()
                .ok()
                .filter(|op| !op.est_unaire())
                .map(Touche::Operation),
        }
    }

    /// Touche nommée du clavier (Enter, Backspace…) -> touche.
    pub fn depuis_touche(key: egui::Key) -> Option<Touche> {
        match key {
            egui::Key::Enter => Some(Touche::Egal),
            egui::Key::Backspace | egui::Key::Delete => Some(Touche::Supprimer),
            egui::Key::Escape => Some(Touche::Effacer),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub evaluateur: Evaluateur,

    // --- paramètres hôte ---
    pub longueur_max: usize,
    pub taille_courant: f32,
    pub taille_expression: f32,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_config(&Config::default())
    }
}

impl AppCalc {
    pub fn avec_config(config: &Config) -> Self {
        Self {
            evaluateur: Evaluateur::new(),
            longueur_max: config.saisie.longueur_max.max(1),
            taille_courant: config.affichage.taille_courant,
            taille_expression: config.affichage.taille_expression,
        }
    }

    /// Applique une touche à l’évaluateur.
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.saisir_borne(|e| e.append_digit(c)),
            Touche::Point => self.saisir_borne(Evaluateur::append_decimal_point),
            Touche::Operation(op) => self.evaluateur.request_operation(op),
            Touche::Egal => self.evaluateur.compute(),
            Touche::Supprimer => self.evaluateur.delete_last(),
            Touche::Effacer => self.evaluateur.clear(),
        }
    }

    /// Saisie sous borne : seule une frappe qui ALLONGE le texte au-delà de
    /// `longueur_max` est refusée. Remplacer le "0" initial ou repartir après un
    /// résultat n’allonge rien.
    fn saisir_borne(&mut self, frappe: impl FnOnce(&mut Evaluateur)) {
        let avant = self.evaluateur.current_text().chars().count();
        let mut essai = self.evaluateur.clone();
        frappe(&mut essai);
        let apres = essai.current_text().chars().count();

        if apres > avant && apres > self.longueur_max {
            trace!(longueur_max = self.longueur_max, "saisie pleine, frappe ignorée");
            return;
        }
        self.evaluateur = essai;
    }

    pub fn affichage(&self) -> Affichage {
        self.evaluateur.affichage()
    }
}
