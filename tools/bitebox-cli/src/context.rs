//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bitebox_commerce::feedback::FeedbackLog;
use bitebox_commerce::{CartStore, Catalog};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Directory the config was found in, or the working directory.
    pub config_dir: PathBuf,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_dir) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.clone());
            (CliConfig::load(&path)?, dir)
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_else(|| (CliConfig::default(), cwd.clone()))
        };

        Ok(Self {
            config,
            config_dir,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(&config_path) {
                        return Some((config, current));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the restaurant catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        self.config.catalog.load(&self.config_dir)
    }

    /// Open the feedback log.
    pub fn feedback_log(&self) -> FeedbackLog {
        self.config.feedback.log(&self.config_dir)
    }

    /// Create the session's cart store.
    pub fn cart_store(&self) -> CartStore {
        CartStore::new(&self.config.cart)
    }
}
