use serde::{Deserialize, Serialize};
use crate::models::{AttendanceWeights, EventRecord, ScoredEvent, ScoringWeights, UserProfile};
use crate::core::{
    attendance::calculate_attendance_probability,
    filters::{matches_filter, sort_events, EventFilter, SortBy},
    scoring::calculate_match_score,
};

/// Minimum match score (exclusive) for the recommended list
pub const DEFAULT_RECOMMENDED_THRESHOLD: u8 = 70;

/// Minimum match score (exclusive) counted as a high match in insights
pub const DEFAULT_HIGH_MATCH_THRESHOLD: u8 = 80;

/// Summary shown under the browsed event list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(rename = "highMatchCount")]
    pub high_match_count: usize,
    /// Rounded mean attendance probability, `None` for an empty list
    #[serde(rename = "averageAttendanceProbability")]
    pub average_attendance_probability: Option<u8>,
    #[serde(rename = "localEventCount")]
    pub local_event_count: usize,
}

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "eventsAttended")]
    pub events_attended: u32,
    #[serde(rename = "skillsAcquired")]
    pub skills_acquired: usize,
    #[serde(rename = "networkConnections")]
    pub network_connections: u32,
    #[serde(rename = "badgesEarned")]
    pub badges_earned: usize,
}

impl DashboardStats {
    pub fn for_user(user: &UserProfile, network_connections: u32) -> Self {
        Self {
            events_attended: user.events_attended,
            skills_acquired: user.skills.len(),
            network_connections,
            badges_earned: user.badges.len(),
        }
    }
}

/// Scores events for a user and builds the browse, recommended and upcoming lists
///
/// Scores are recomputed on every call and only attached to [`ScoredEvent`]
/// copies, the catalog records are never touched.
#[derive(Debug, Clone)]
pub struct Recommender {
    scoring: ScoringWeights,
    attendance: AttendanceWeights,
    recommended_threshold: u8,
    high_match_threshold: u8,
}

impl Recommender {
    pub fn new(scoring: ScoringWeights, attendance: AttendanceWeights) -> Self {
        Self {
            scoring,
            attendance,
            recommended_threshold: DEFAULT_RECOMMENDED_THRESHOLD,
            high_match_threshold: DEFAULT_HIGH_MATCH_THRESHOLD,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), AttendanceWeights::default())
    }

    pub fn with_thresholds(mut self, recommended: u8, high_match: u8) -> Self {
        self.recommended_threshold = recommended;
        self.high_match_threshold = high_match;
        self
    }

    /// Attach match score and attendance probability to a copy of the event
    pub fn score_event(&self, user: &UserProfile, event: &EventRecord) -> ScoredEvent {
        let match_score = calculate_match_score(user, event, &self.scoring);
        let attendance_probability =
            calculate_attendance_probability(user, event, match_score, &self.attendance);

        ScoredEvent {
            event: event.clone(),
            match_score,
            attendance_probability,
        }
    }

    /// Score every event, keeping catalog order
    pub fn score_events(&self, user: &UserProfile, events: &[EventRecord]) -> Vec<ScoredEvent> {
        events
            .iter()
            .map(|event| self.score_event(user, event))
            .collect()
    }

    /// Score, filter and sort events for the browse view
    pub fn browse(
        &self,
        user: &UserProfile,
        events: &[EventRecord],
        filter: &EventFilter,
        sort: SortBy,
    ) -> Vec<ScoredEvent> {
        let mut scored: Vec<ScoredEvent> = events
            .iter()
            .filter(|event| matches_filter(event, filter))
            .map(|event| self.score_event(user, event))
            .collect();

        sort_events(&mut scored, sort);

        tracing::debug!(
            "Browse for user {} kept {} of {} events",
            user.id,
            scored.len(),
            events.len()
        );

        scored
    }

    /// Events scoring above the recommended threshold, best match first
    pub fn recommended(&self, user: &UserProfile, events: &[EventRecord]) -> Vec<ScoredEvent> {
        let mut scored: Vec<ScoredEvent> = self
            .score_events(user, events)
            .into_iter()
            .filter(|event| event.match_score > self.recommended_threshold)
            .collect();

        sort_events(&mut scored, SortBy::Match);
        scored
    }

    /// Events dated strictly after `today`, in catalog order
    pub fn upcoming(
        &self,
        user: &UserProfile,
        events: &[EventRecord],
        today: chrono::NaiveDate,
    ) -> Vec<ScoredEvent> {
        events
            .iter()
            .filter(|event| event.date > today)
            .map(|event| self.score_event(user, event))
            .collect()
    }

    /// Personalization summary for a scored list
    pub fn insights(&self, events: &[ScoredEvent]) -> Insights {
        let high_match_count = events
            .iter()
            .filter(|event| event.match_score > self.high_match_threshold)
            .count();

        let average_attendance_probability = if events.is_empty() {
            None
        } else {
            let total: u32 = events
                .iter()
                .map(|event| event.attendance_probability as u32)
                .sum();
            Some((total as f64 / events.len() as f64).round() as u8)
        };

        Insights {
            high_match_count,
            average_attendance_probability,
            // Every catalog event is regional
            local_event_count: events.len(),
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
