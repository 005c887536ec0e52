// =============================================================================
// CONFIG : Paramètres d'une exécution des rapports
// =============================================================================
//
// Priorité de résolution, pour chaque paramètre :
//   1. argument de ligne de commande   (le plus fort)
//   2. variable d'environnement        (PODIUM_NAME_PREFIX, PODIUM_FIXTURES,
//                                       PODIUM_FORMAT)
//   3. fichier TOML de configuration
//   4. valeur par défaut compilée
//
// Les niveaux 1 et 2 arrivent déjà fusionnés par clap dans `ConfigOverrides`.
//
// =============================================================================

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::instance::Fixtures;
use crate::error::{Error, Result};
use crate::render::OutputFormat;

/// Préfixe B1 par défaut : « А » majuscule cyrillique (U+0410)
pub const DEFAULT_NAME_PREFIX: &str = "А";

/// Configuration résolue pour une exécution
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Préfixe sélectionnant les chefs du rapport B1
    pub name_prefix: String,
    /// Fichier de fixtures ; `None` = jeu d'exemple intégré
    pub fixtures: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            fixtures: None,
            format: OutputFormat::default(),
        }
    }
}

/// Valeurs venues de la ligne de commande ou de l'environnement
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub name_prefix: Option<String>,
    pub fixtures: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl ReportConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Charge un fichier TOML. Un chemin de fixtures relatif est résolu
    /// depuis le répertoire du fichier de configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = ReportConfig::from_toml_str(&text)?;

        if let (Some(fixtures), Some(dir)) = (config.fixtures.as_ref(), path.parent()) {
            if fixtures.is_relative() {
                config.fixtures = Some(dir.join(fixtures));
            }
        }
        Ok(config)
    }

    /// Fusionne le fichier (s'il y en a un) avec les surcharges CLI/env.
    pub fn resolve(config_file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => ReportConfig::load(path)?,
            None => ReportConfig::default(),
        };

        if let Some(prefix) = overrides.name_prefix {
            config.name_prefix = prefix;
        }
        if let Some(fixtures) = overrides.fixtures {
            config.fixtures = Some(fixtures);
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }

        config.validate()?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name_prefix.is_empty() {
            return Err(Error::Config("name_prefix ne doit pas être vide".to_string()));
        }
        Ok(())
    }

    /// Fixtures de l'exécution : le fichier configuré, sinon le jeu d'exemple.
    pub fn load_fixtures(&self) -> Result<Fixtures> {
        match &self.fixtures {
            Some(path) => Fixtures::load(path),
            None => Ok(Fixtures::sample()),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::resolve(None, ConfigOverrides::default()).unwrap();
        assert_eq!(config.name_prefix, "А");
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.load_fixtures().unwrap(), Fixtures::sample());
    }

    #[test]
    fn test_file_then_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("podium.toml");
        std::fs::write(&path, "name_prefix = \"П\"\nformat = \"json\"\nfixtures = \"data.toml\"\n")
            .unwrap();

        let config = ReportConfig::resolve(Some(&path), ConfigOverrides::default()).unwrap();
        assert_eq!(config.name_prefix, "П");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.fixtures, Some(dir.path().join("data.toml")));

        let overrides = ConfigOverrides {
            name_prefix: Some("С".to_string()),
            ..Default::default()
        };
        let config = ReportConfig::resolve(Some(&path), overrides).unwrap();
        assert_eq!(config.name_prefix, "С");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ReportConfig::from_toml_str("prefix = \"А\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let overrides = ConfigOverrides {
            name_prefix: Some(String::new()),
            ..Default::default()
        };
        assert!(ReportConfig::resolve(None, overrides).is_err());
    }

    #[test]
    fn test_missing_fixture_file() {
        let config = ReportConfig {
            fixtures: Some(PathBuf::from("/nonexistent/podium/fixtures.toml")),
            ..Default::default()
        };
        assert!(matches!(config.load_fixtures(), Err(Error::Io(_))));
    }
}
