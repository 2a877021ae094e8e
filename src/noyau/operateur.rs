// src/noyau/operateur.rs
//
// Opérateurs de la calculatrice : ensemble FERMÉ + règle arithmétique par variante.
// Le dispatch se fait par `match` exhaustif (pas de table de closures à part).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Symbole reçu de l’hôte qui ne correspond à aucun opérateur connu.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("opérateur inconnu: {0:?}")]
pub struct OperateurInconnu(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    // binaires
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,

    // unaires
    Racine,
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Unaire,
    Binaire,
}

/// Règle numérique d’un opérateur (f64, sémantique IEEE-754, jamais d’erreur).
#[derive(Clone, Copy)]
pub enum Regle {
    Unaire(fn(f64) -> f64),
    Binaire(fn(f64, f64) -> f64),
}

impl Operateur {
    pub const TOUS: [Operateur; 11] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Puissance,
        Operateur::Racine,
        Operateur::Sin,
        Operateur::Cos,
        Operateur::Tan,
        Operateur::Log,
        Operateur::Ln,
    ];

    /// Symbole affiché dans la ligne “expression en attente”.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
            Operateur::Puissance => "^",
            Operateur::Racine => "√",
            Operateur::Sin => "sin",
            Operateur::Cos => "cos",
            Operateur::Tan => "tan",
            Operateur::Log => "log",
            Operateur::Ln => "ln",
        }
    }

    pub fn arite(self) -> Arite {
        match self.regle() {
            Regle::Unaire(_) => Arite::Unaire,
            Regle::Binaire(_) => Arite::Binaire,
        }
    }

    pub fn est_unaire(self) -> bool {
        self.arite() == Arite::Unaire
    }

    pub fn regle(self) -> Regle {
        match self {
            Operateur::Plus => Regle::Binaire(|a, b| a + b),
            Operateur::Moins => Regle::Binaire(|a, b| a - b),
            Operateur::Fois => Regle::Binaire(|a, b| a * b),
            // b == 0 => ±inf ou NaN (0/0), volontairement non filtré
            Operateur::Divise => Regle::Binaire(|a, b| a / b),
            Operateur::Puissance => Regle::Binaire(f64::powf),

            Operateur::Racine => Regle::Unaire(f64::sqrt),
            // radians
            Operateur::Sin => Regle::Unaire(f64::sin),
            Operateur::Cos => Regle::Unaire(f64::cos),
            Operateur::Tan => Regle::Unaire(f64::tan),
            Operateur::Log => Regle::Unaire(f64::log10),
            Operateur::Ln => Regle::Unaire(f64::ln),
        }
    }

    /// Applique la règle. Pour un unaire, `droite` est ignoré.
    pub fn appliquer(self, gauche: f64, droite: f64) -> f64 {
        match self.regle() {
            Regle::Unaire(f) => f(gauche),
            Regle::Binaire(f) => f(gauche, droite),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

impl FromStr for Operateur {
    type Err = OperateurInconnu;

    /// Accepte les symboles affichés + quelques alias (sqrt, ×, ÷, −).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let op = match t {
            "+" => Operateur::Plus,
            "-" | "−" => Operateur::Moins,
            "*" | "×" => Operateur::Fois,
            "/" | "÷" => Operateur::Divise,
            "^" => Operateur::Puissance,
            "√" => Operateur::Racine,
            _ => match t.to_lowercase().as_str() {
                "sqrt" => Operateur::Racine,
                "sin" => Operateur::Sin,
                "cos" => Operateur::Cos,
                "tan" => Operateur::Tan,
                "log" => Operateur::Log,
                "ln" => Operateur::Ln,
                _ => return Err(OperateurInconnu(s.to_string())),
            },
        };
        Ok(op)
    }
}
