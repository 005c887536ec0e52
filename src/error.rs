// =============================================================================
// ERROR : Les erreurs du moteur de rapports
// =============================================================================
//
// Le cœur relationnel ne peut échouer qu'à un seul endroit : le tri
// dynamique, quand deux clés n'ont pas de type comparable. Tout le reste
// (jointures sans correspondance, séquences vides, groupes vides) produit
// simplement moins de lignes.
//
// Les autres variantes concernent la couche extérieure : lecture des
// fichiers de fixtures et de configuration, rendu JSON.
//
// =============================================================================

use thiserror::Error;

use crate::core::typeside::BaseType;

/// Résultat standard du crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Deux clés de tri de types incomparables (ex: String contre Int)
    #[error("Type mismatch: cannot compare {left} with {right}")]
    TypeMismatch { left: BaseType, right: BaseType },

    /// Attribut inconnu demandé comme clé de tri
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// Fichier de fixtures illisible
    #[error("Fixture error: {0}")]
    Fixture(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
