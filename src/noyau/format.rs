// src/noyau/format.rs
//
// Passage texte <-> f64 pour les opérandes.
// Les opérandes restent du TEXTE jusqu’au calcul (écho exact de la saisie :
// "3.", "0.50"...). On ne convertit qu’au moment d’appliquer une règle.

/// Formes textuelles des valeurs spéciales (celles que l’hôte a toujours affichées).
pub const TEXTE_INFINI: &str = "Infinity";
pub const TEXTE_MOINS_INFINI: &str = "-Infinity";
pub const TEXTE_NAN: &str = "NaN";

/// Hors de [SEUIL_PETIT, SEUIL_GRAND[ : notation exponentielle (mêmes bornes que l’hôte web).
const SEUIL_GRAND: f64 = 1e21;
const SEUIL_PETIT: f64 = 1e-6;

/* ------------------------ f64 -> texte ------------------------ */

/// Texte d’un résultat :
/// - entier sans partie décimale (8, pas 8.0)
/// - décimal le plus court qui relit la même valeur (0.30000000000000004)
/// - -0 affiché 0
/// - très grand / très petit : mantisse la plus courte + exposant (1.0715086071862673e301)
/// - spéciaux : Infinity / -Infinity / NaN
pub fn format_resultat(x: f64) -> String {
    if x.is_nan() {
        return TEXTE_NAN.to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_positive() {
            TEXTE_INFINI.to_string()
        } else {
            TEXTE_MOINS_INFINI.to_string()
        };
    }
    if x == 0.0 {
        return "0".to_string();
    }
    let a = x.abs();
    if !(SEUIL_PETIT..SEUIL_GRAND).contains(&a) {
        // LowerExp : aller-retour exact aussi, relu tel quel par `lire_operande`
        return format!("{x:e}");
    }
    // Display de f64 : aller-retour exact, sans exposant dans cette plage.
    format!("{x}")
}

/* ------------------------ texte -> f64 ------------------------ */

/// Lecture d’un opérande. Tout ce qui ne se lit pas vaut NaN
/// (vide, ".", "-", texte tronqué par DEL comme "Infinit"...).
pub fn lire_operande(texte: &str) -> f64 {
    let t = texte.trim();
    match t {
        "" => f64::NAN,
        TEXTE_INFINI => f64::INFINITY,
        TEXTE_MOINS_INFINI => f64::NEG_INFINITY,
        _ => t.parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Vrai si le texte est un résultat non fini (à afficher “spécialement” côté hôte).
pub fn est_special(texte: &str) -> bool {
    matches!(texte, TEXTE_INFINI | TEXTE_MOINS_INFINI | TEXTE_NAN)
}
