//! Cart configuration.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Default ceiling on a single line item's quantity.
pub const DEFAULT_MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// Settings for a cart store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Highest quantity a single line item may reach.
    #[serde(default = "default_max_quantity")]
    pub max_quantity_per_item: u32,

    /// Start the cart with the two sample items.
    #[serde(default)]
    pub seed_demo_items: bool,
}

fn default_max_quantity() -> u32 {
    DEFAULT_MAX_QUANTITY_PER_ITEM
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            max_quantity_per_item: default_max_quantity(),
            seed_demo_items: false,
        }
    }
}

impl CartConfig {
    /// Set the per-item quantity ceiling.
    pub fn with_max_quantity(mut self, max: u32) -> Self {
        self.max_quantity_per_item = max;
        self
    }

    /// Enable or disable demo seeding.
    pub fn with_demo_items(mut self, seed: bool) -> Self {
        self.seed_demo_items = seed;
        self
    }

    /// Reject values the cart cannot honor.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.max_quantity_per_item == 0 {
            return Err(CommerceError::InvalidConfig(
                "max_quantity_per_item must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML fragment.
    pub fn from_toml(source: &str) -> Result<Self, CommerceError> {
        let config: CartConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CartConfig::default();
        assert_eq!(config.max_quantity_per_item, 9999);
        assert!(!config.seed_demo_items);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CartConfig::from_toml("seed_demo_items = true").unwrap();
        assert!(config.seed_demo_items);
        assert_eq!(config.max_quantity_per_item, DEFAULT_MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_zero_ceiling_rejected() {
        let result = CartConfig::from_toml("max_quantity_per_item = 0");
        assert!(matches!(result, Err(CommerceError::InvalidConfig(_))));
    }

    #[test]
    fn test_bad_toml() {
        let result = CartConfig::from_toml("max_quantity_per_item = \"lots\"");
        assert!(matches!(result, Err(CommerceError::SerializationError(_))));
    }
}
