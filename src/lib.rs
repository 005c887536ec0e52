// =============================================================================
// PODIUM : Rapports relationnels en mémoire sur des orchestres
// =============================================================================
//
// Podium dérive deux vues relationnelles à partir de trois collections
// fixes (orchestres, chefs, affectations) et en tire trois rapports :
//
//   B1 : chefs dont le nom commence par une lettre donnée
//   B2 : salaire minimum par orchestre, trié par ce minimum
//   B3 : toutes les affectations, triées par nom de chef
//
// Architecture :
//   core/    → le cœur relationnel pur (jointure, filtre, agrégat, tri)
//   render   → mise en forme des rapports (texte, JSON)
//   config   → configuration (CLI > environnement > fichier TOML > défaut)
//   error    → le type d'erreur du crate
//
// =============================================================================

pub mod core;
pub mod config;
pub mod error;
pub mod render;

pub use error::{Error, Result};
