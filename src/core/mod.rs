pub mod client;

pub use crate::domain::model::{ApiStats, RecommendResponse};
pub use crate::domain::ports::{ConfigProvider, RecommendationObserver};
pub use crate::utils::error::Result;
