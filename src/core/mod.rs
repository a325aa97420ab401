// Core algorithm exports
pub mod attendance;
pub mod content;
pub mod filters;
pub mod recommender;
pub mod scoring;

pub use attendance::calculate_attendance_probability;
pub use content::{compose_post, generate_hashtags, generate_post, linkedin_share_url};
pub use filters::{matches_filter, matches_search, sort_events, EventFilter, SortBy};
pub use recommender::{DashboardStats, Insights, Recommender};
pub use scoring::{calculate_match_score, calculate_skill_overlap};
