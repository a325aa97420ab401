use serde::{Deserialize, Serialize};
use crate::core::recommender::{DashboardStats, Insights};
use crate::models::domain::{ScoredEvent, UserProfile};

/// Response for the browse events endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseEventsResponse {
    pub events: Vec<ScoredEvent>,
    pub insights: Insights,
    pub total_results: usize,
}

/// Response for the dashboard endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub user: UserProfile,
    pub stats: DashboardStats,
    pub upcoming: Vec<ScoredEvent>,
    pub recommended: Vec<ScoredEvent>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// Translation lookup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub key: String,
    pub text: String,
}
