//! Configuration de l’hôte (fichier TOML, tout est optionnel).
//!
//! Ordre de recherche (natif seulement) :
//! 1. variable d’environnement `$CALCULATRICE_CONFIG`
//! 2. `<config_dir>/calculatrice-etude/config.toml`
//! 3. valeurs par défaut
//!
//! En wasm32 : valeurs par défaut, pas de système de fichiers.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub const VAR_ENV: &str = "CALCULATRICE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigErreur {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML invalide dans {chemin}: {source}")]
    Toml {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("valeur invalide: {0}")]
    Valeur(String),
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fenetre: FenetreConfig,
    pub saisie: SaisieConfig,
    pub affichage: AffichageConfig,
}

/// Fenêtre native (ignoré en web).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FenetreConfig {
    pub largeur: f32,
    pub hauteur: f32,
}

/// Borne imposée par l’hôte (le noyau n’en a pas).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SaisieConfig {
    pub longueur_max: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AffichageConfig {
    pub taille_courant: f32,
    pub taille_expression: f32,
}

// --- Défauts ---

impl Default for FenetreConfig {
    fn default() -> Self {
        Self {
            largeur: 360.0,
            hauteur: 560.0,
        }
    }
}

impl Default for SaisieConfig {
    fn default() -> Self {
        Self { longueur_max: 24 }
    }
}

impl Default for AffichageConfig {
    fn default() -> Self {
        Self {
            taille_courant: 32.0,
            taille_expression: 16.0,
        }
    }
}

impl Config {
    pub fn depuis_toml(contenu: &str, chemin: PathBuf) -> Result<Self, ConfigErreur> {
        let config: Config =
            toml::from_str(contenu).map_err(|source| ConfigErreur::Toml { chemin, source })?;
        config.valider()?;
        Ok(config)
    }

    pub fn valider(&self) -> Result<(), ConfigErreur> {
        if self.saisie.longueur_max == 0 {
            return Err(ConfigErreur::Valeur("saisie.longueur_max doit être >= 1".into()));
        }
        let tailles = [
            ("fenetre.largeur", self.fenetre.largeur),
            ("fenetre.hauteur", self.fenetre.hauteur),
            ("affichage.taille_courant", self.affichage.taille_courant),
            ("affichage.taille_expression", self.affichage.taille_expression),
        ];
        for (nom, v) in tailles {
            if !(v.is_finite() && v > 0.0) {
                return Err(ConfigErreur::Valeur(format!("{nom} doit être > 0 (reçu {v})")));
            }
        }
        Ok(())
    }
}

/// Charge la configuration. Pas de fichier => défauts.
#[cfg(not(target_arch = "wasm32"))]
pub fn charger() -> Result<Config, ConfigErreur> {
    charger_depuis(chemin_config(std::env::var(VAR_ENV).ok(), dirs::config_dir()))
}

#[cfg(target_arch = "wasm32")]
pub fn charger() -> Result<Config, ConfigErreur> {
    Ok(Config::default())
}

/// Charge la configuration ; en cas d’erreur, on prévient et on garde les défauts.
pub fn charger_ou_defaut() -> Config {
    ou_defaut(charger())
}

fn ou_defaut(resultat: Result<Config, ConfigErreur>) -> Config {
    resultat.unwrap_or_else(|e| {
        tracing::warn!("configuration ignorée: {e}");
        Config::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn charger_depuis(chemin: Option<PathBuf>) -> Result<Config, ConfigErreur> {
    let Some(chemin) = chemin else {
        return Ok(Config::default());
    };
    if !chemin.exists() {
        tracing::debug!(chemin = %chemin.display(), "pas de fichier de configuration");
        return Ok(Config::default());
    }

    let contenu = std::fs::read_to_string(&chemin).map_err(|source| ConfigErreur::Lecture {
        chemin: chemin.clone(),
        source,
    })?;
    let config = Config::depuis_toml(&contenu, chemin.clone())?;
    tracing::info!(chemin = %chemin.display(), "configuration chargée");
    Ok(config)
}

/// `$CALCULATRICE_CONFIG` d’abord, sinon `<config_dir>/calculatrice-etude/config.toml`.
#[cfg(not(target_arch = "wasm32"))]
fn chemin_config(var_env: Option<String>, dossier_config: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = var_env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(p));
    }
    dossier_config.map(|d| d.join("calculatrice-etude").join("config.toml"))
}
