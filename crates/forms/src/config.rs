//! Builder configuration.

use serde::{Deserialize, Serialize};

/// Prefix of the flag that pushes a field to every shop.
pub const DEFAULT_MODIFY_ALL_SHOPS_PREFIX: &str = "modify_all_shops_";

/// Environment variable overriding [`DEFAULT_MODIFY_ALL_SHOPS_PREFIX`].
pub const MODIFY_ALL_SHOPS_PREFIX_ENV: &str = "BACKOFFICE_MODIFY_ALL_SHOPS_PREFIX";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    pub modify_all_shops_prefix: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            modify_all_shops_prefix: DEFAULT_MODIFY_ALL_SHOPS_PREFIX.to_string(),
        }
    }
}

impl BuilderConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(MODIFY_ALL_SHOPS_PREFIX_ENV) {
            Some(prefix) if !prefix.trim().is_empty() => {
                tracing::debug!(prefix = %prefix, "using modify-all-shops prefix from environment");
                Self {
                    modify_all_shops_prefix: prefix,
                }
            }
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_variable_is_missing_or_blank() {
        assert_eq!(BuilderConfig::from_lookup(|_| None), BuilderConfig::default());
        assert_eq!(
            BuilderConfig::from_lookup(|_| Some("  ".to_string())),
            BuilderConfig::default()
        );
        assert_eq!(
            BuilderConfig::default().modify_all_shops_prefix,
            "modify_all_shops_"
        );
    }

    #[test]
    fn reads_prefix_from_lookup() {
        let config = BuilderConfig::from_lookup(|key| {
            (key == MODIFY_ALL_SHOPS_PREFIX_ENV).then(|| "all_".to_string())
        });
        assert_eq!(config.modify_all_shops_prefix, "all_");
    }
}
