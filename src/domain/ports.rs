use crate::utils::error::RecError;

/// Observation channel for request outcomes. Implementations are invoked
/// inline on the request task and must not block.
pub trait RecommendationObserver: Send + Sync {
    /// Invoked exactly once, when the client is constructed.
    fn on_ready(&self);

    fn on_recommendations(&self, user_id: &str, items: &[serde_json::Value]);

    fn on_failure(&self, user_id: &str, error: &RecError);
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn default_method(&self) -> &str;
    fn recommendation_count(&self) -> Option<usize>;
}
