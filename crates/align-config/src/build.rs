//! Build environment configuration.

use align_core::enums::BuildEnvironment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BuildConfig {
    /// `development` or `production`. Defaults to the profile this crate was
    /// compiled with.
    #[serde(default)]
    pub environment: BuildEnvironment,
}

impl BuildConfig {
    #[must_use]
    pub const fn is_dev_build(&self) -> bool {
        self.environment.is_dev_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_is_not_dev() {
        let config = BuildConfig {
            environment: BuildEnvironment::Production,
        };
        assert!(!config.is_dev_build());
    }

    #[test]
    fn default_follows_compile_profile() {
        let config = BuildConfig::default();
        assert_eq!(config.is_dev_build(), cfg!(debug_assertions));
    }
}
