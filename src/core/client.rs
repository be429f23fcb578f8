use crate::core::{ApiStats, ConfigProvider, RecommendResponse, RecommendationObserver, Result};
use crate::utils::error::RecError;
use reqwest::Client;

/// Strategy used when the caller does not name one.
pub const DEFAULT_METHOD: &str = "hybrid";

/// Client for the recommendation API.
///
/// Each request is an independent single-shot call; there is no shared state
/// between invocations, no deduplication of in-flight requests, and no
/// retry. Outcomes are routed to the injected observer, or returned as an
/// explicit `Result` via the `fetch_*` methods.
pub struct RecommendationClient<O: RecommendationObserver, C: ConfigProvider> {
    observer: O,
    config: C,
    client: Client,
}

impl<O: RecommendationObserver, C: ConfigProvider> RecommendationClient<O, C> {
    /// Announces readiness through the observer exactly once.
    pub fn new(observer: O, config: C) -> Self {
        observer.on_ready();
        Self {
            observer,
            config,
            client: Client::new(),
        }
    }

    /// Fetch recommendations with the configured defaults and report the
    /// outcome to the observer.
    pub async fn get_recommendations(&self, user_id: &str) {
        let count = self.config.recommendation_count();
        self.get_recommendations_with(user_id, self.config.default_method(), count)
            .await;
    }

    /// Fetch recommendations for an explicit method and count, and report
    /// the outcome to the observer. Both the service saying no and any
    /// transport failure land on the error channel.
    pub async fn get_recommendations_with(&self, user_id: &str, method: &str, count: Option<usize>) {
        match self.fetch_recommendations(user_id, method, count).await {
            Ok(items) => self.observer.on_recommendations(user_id, &items),
            Err(e) => self.observer.on_failure(user_id, &e),
        }
    }

    /// Fetch recommendations and return them to the caller.
    ///
    /// Covers every failure layer in one error type: connection errors and
    /// non-2xx statuses, bodies that are not the expected JSON, and replies
    /// where the service itself reports `success: false`.
    pub async fn fetch_recommendations(
        &self,
        user_id: &str,
        method: &str,
        count: Option<usize>,
    ) -> Result<Vec<serde_json::Value>> {
        let url = format!("{}/api/recommend/{}", self.base_url(), user_id);
        tracing::debug!("Requesting recommendations: {} (method={})", url, method);

        let mut request = self.client.get(&url).query(&[("method", method)]);
        if let Some(n) = count {
            request = request.query(&[("n", &n.to_string())]);
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;

        let body = response.text().await?;
        let parsed: RecommendResponse = serde_json::from_str(&body)?;

        if parsed.success {
            Ok(parsed.recommendations)
        } else {
            Err(RecError::ServiceError {
                message: parsed
                    .error
                    .unwrap_or_else(|| "unknown failure".to_string()),
            })
        }
    }

    /// Fetch aggregate statistics from the service.
    pub async fn fetch_stats(&self) -> Result<ApiStats> {
        let url = format!("{}/api/stats", self.base_url());
        tracing::debug!("Requesting statistics: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let stats: ApiStats = serde_json::from_str(&body)?;
        Ok(stats)
    }

    fn base_url(&self) -> &str {
        self.config.base_url().trim_end_matches('/')
    }
}
