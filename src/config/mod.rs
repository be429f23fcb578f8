#[cfg(feature = "cli")]
pub mod cli;

use crate::core::client::DEFAULT_METHOD;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Plain configuration for library use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticConfig {
    pub base_url: String,
    pub method: String,
    pub count: Option<usize>,
}

impl StaticConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            method: DEFAULT_METHOD.to_string(),
            count: None,
        }
    }
}

impl ConfigProvider for StaticConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn default_method(&self) -> &str {
        &self.method
    }

    fn recommendation_count(&self) -> Option<usize> {
        self.count
    }
}

impl Validate for StaticConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("method", &self.method)?;
        Ok(())
    }
}
