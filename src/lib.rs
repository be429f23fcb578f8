pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::LogObserver;
pub use config::StaticConfig;
pub use crate::core::client::{RecommendationClient, DEFAULT_METHOD};
pub use domain::model::{ApiStats, RecommendResponse};
pub use domain::ports::{ConfigProvider, RecommendationObserver};
pub use utils::error::{RecError, Result};
