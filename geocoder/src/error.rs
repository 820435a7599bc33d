//! Types d'erreurs pour le crate geocoder

use thiserror::Error;

/// Erreurs pouvant survenir lors du géocodage et du formatage
#[derive(Debug, Error)]
pub enum GeocoderError {
    /// Entrée JSON illisible ou champ de forme inattendue
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Géométrie WKT/GeoJSON illisible
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Plugin absent du registre
    #[error("Unknown {kind} plugin: {id}")]
    UnknownPlugin { kind: &'static str, id: String },

    /// Options de plugin invalides
    #[error("Invalid options for plugin {plugin}: {reason}")]
    InvalidOptions { plugin: String, reason: String },

    /// L'adresse n'a pas de coordonnées alors que le dumper en exige
    #[error("Address has no coordinates")]
    MissingCoordinates,

    /// Échec d'un provider
    #[error("Provider {provider} failed: {reason}")]
    Provider { provider: String, reason: String },

    /// Échec d'un dumper
    #[error("Dumper {dumper} failed: {reason}")]
    Dump { dumper: String, reason: String },

    /// Lecture d'un jeu de données local impossible
    #[error("Cannot read {path}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl GeocoderError {
    /// Crée une erreur d'entrée malformée
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput(reason.into())
    }

    /// Crée une erreur de provider avec contexte
    pub fn provider(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Crée une erreur de dumper avec contexte
    pub fn dump(dumper: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Dump {
            dumper: dumper.into(),
            reason: reason.into(),
        }
    }

    /// Crée une erreur de lecture de fichier
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Crée une erreur d'options de plugin
    pub fn invalid_options(plugin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            plugin: plugin.into(),
            reason: reason.into(),
        }
    }
}
