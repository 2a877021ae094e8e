//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - operateur.rs : ensemble fermé d’opérateurs + règle f64 par variante
//! - saisie.rs    : accumulateur (texte de l’opérande, point unique, drapeau de reprise)
//! - format.rs    : texte <-> f64 (Infinity / NaN compris)
//! - eval.rs      : évaluateur complet (pli gauche->droite, calcul, projection)

pub mod eval;
pub mod format;
pub mod operateur;
pub mod saisie;

#[cfg(test)]
mod tests_scientifiques;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use eval::{Affichage, Evaluateur};
pub use operateur::Operateur;
