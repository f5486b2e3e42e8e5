//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use bitebox_commerce::feedback::FeedbackLog;
use bitebox_commerce::{CartConfig, Catalog};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["bitebox.toml", ".bitebox.toml", "bitebox.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Cart store settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Where restaurants come from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Where ratings are kept.
    #[serde(default)]
    pub feedback: FeedbackConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config
            .cart
            .validate()
            .with_context(|| format!("Invalid [cart] section in {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON or TOML catalog file. The built-in demo catalog when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl CatalogConfig {
    /// Load the configured catalog. Relative paths resolve against `base`.
    pub fn load(&self, base: &Path) -> Result<Catalog> {
        let Some(ref path) = self.path else {
            return Ok(Catalog::demo());
        };

        let path = base.join(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

        let catalog = if is_json(&path) {
            Catalog::from_json(&content)
        } else {
            Catalog::from_toml(&content)
        };
        catalog.with_context(|| format!("Failed to parse catalog: {}", path.display()))
    }
}

/// Feedback storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// JSON file holding submitted ratings.
    #[serde(default = "default_feedback_path")]
    pub path: String,
}

fn default_feedback_path() -> String {
    "bitebox-feedback.json".to_string()
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            path: default_feedback_path(),
        }
    }
}

impl FeedbackConfig {
    /// Open the feedback log. Relative paths resolve against `base`.
    pub fn log(&self, base: &Path) -> FeedbackLog {
        FeedbackLog::open(base.join(&self.path))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Generate a default bitebox.toml config file.
pub fn generate_default_config() -> String {
    r#"# Bitebox configuration

[cart]
# Highest quantity a single dish may reach in the cart.
max_quantity_per_item = 9999
# Start every session with two sample items in the cart.
seed_demo_items = false

[catalog]
# JSON or TOML file with [[restaurants]]; the built-in demo catalog when unset.
# path = "catalog.json"

[feedback]
# JSON file where `bitebox rate` stores ratings.
path = "bitebox-feedback.json"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_and_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bitebox.toml");

        let mut config = CliConfig::default();
        config.cart.max_quantity_per_item = 5;
        config.catalog.path = Some("menu.json".to_string());
        config.save(&path).unwrap();

        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_zero_ceiling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bitebox.toml");
        std::fs::write(&path, "[cart]\nmax_quantity_per_item = 0\n").unwrap();

        assert!(CliConfig::load(&path).is_err());
    }

    #[test]
    fn test_feedback_path_resolves_against_config_dir() {
        let config: CliConfig =
            toml::from_str("[feedback]\npath = \"data/ratings.json\"\n").unwrap();
        let log = config.feedback.log(Path::new("/srv/bitebox"));
        assert_eq!(log.path(), Path::new("/srv/bitebox/data/ratings.json"));

        let default_log = CliConfig::default().feedback.log(Path::new("/srv/bitebox"));
        assert_eq!(default_log.path(), Path::new("/srv/bitebox/bitebox-feedback.json"));
    }

    #[test]
    fn test_catalog_defaults_to_demo() {
        let catalog = CatalogConfig::default().load(Path::new(".")).unwrap();
        assert_eq!(catalog, Catalog::demo());
    }

    #[test]
    fn test_catalog_from_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("menu.json"),
            r#"{"restaurants":[{"id":"x","name":"X","category":"pizza","rating":4.0}]}"#,
        )
        .unwrap();

        let config = CatalogConfig {
            path: Some("menu.json".to_string()),
        };
        assert_eq!(config.load(dir.path()).unwrap().len(), 1);
    }
}
