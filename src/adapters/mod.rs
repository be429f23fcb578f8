// Adapters layer: concrete implementations for external ports (observation, config).

use crate::domain::ports::RecommendationObserver;
use crate::utils::error::RecError;

/// Observer backed by the tracing stack. Successful requests land at info
/// level, failures at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl RecommendationObserver for LogObserver {
    fn on_ready(&self) {
        tracing::info!("Recommendation system loaded");
    }

    fn on_recommendations(&self, user_id: &str, items: &[serde_json::Value]) {
        match serde_json::to_string(items) {
            Ok(rendered) => tracing::info!("Recommendations for user {}: {}", user_id, rendered),
            Err(_) => tracing::info!("Recommendations for user {}: {:?}", user_id, items),
        }
    }

    fn on_failure(&self, user_id: &str, error: &RecError) {
        tracing::error!("Recommendation request for user {} failed: {}", user_id, error);
    }
}
