//! Naming configuration.

use serde::{Deserialize, Serialize};

/// Configuration for generated worker object names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Length of the random suffix appended to generated names.
    pub suffix_length: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self { suffix_length: 5 }
    }
}

impl NamingConfig {
    /// Create a config with the given suffix length.
    #[must_use]
    pub fn with_suffix_length(suffix_length: usize) -> Self {
        Self { suffix_length }
    }

    /// Load configuration from environment variables.
    ///
    /// Supported environment variables:
    /// - `LB_NAME_SUFFIX_LENGTH`: length of the random name suffix
    ///
    /// Unparsable values keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("LB_NAME_SUFFIX_LENGTH") {
            if let Ok(n) = val.parse() {
                config.suffix_length = n;
            }
        }

        config
    }
}
