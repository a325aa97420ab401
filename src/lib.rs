//! EventHub - event recommendations and post generation for the Tamil Nadu tech community
//!
//! The core scores events against a user profile (match score and attendance
//! probability) and renders shareable posts with hashtags. Both are pure and
//! deterministic; the catalog, community hub and HTTP routes are thin layers
//! around them.

pub mod analytics;
pub mod config;
pub mod core;
pub mod i18n;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_attendance_probability, calculate_match_score, compose_post, generate_hashtags,
    generate_post, EventFilter, Recommender, SortBy,
};
pub use models::{
    AttendanceWeights, CareerStage, EventRecord, EventType, GeneratedPost, Level, ScoredEvent,
    ScoringWeights, Tone, UserProfile,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let catalog = services::Catalog::seeded();
        let user = catalog.current_user();
        let event = &catalog.events()[0];

        let score = calculate_match_score(user, event, &ScoringWeights::default());
        assert_eq!(score, 53);
    }
}
