use serde::{Deserialize, Serialize};

/// Reply body of the recommendation endpoint.
///
/// The service signals failure in-band: `success` is always present, and the
/// body carries either `recommendations` or `error` depending on it. Extra
/// fields (the service echoes the user id and method back) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    #[serde(default)]
    pub recommendations: Vec<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Aggregate counters from the service's statistics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStats {
    pub total_users: u64,
    pub total_products: u64,
    pub total_transactions: u64,
    pub average_rating: f64,
}
