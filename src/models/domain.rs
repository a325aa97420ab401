use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Platform role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "user")]
    Regular,
    Organizer,
    Admin,
}

/// Seniority of a user, drives the level and event type lookup tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerStage {
    Student,
    Junior,
    Mid,
    Senior,
    Executive,
}

impl CareerStage {
    /// Event difficulty levels considered appropriate for this stage
    pub fn suitable_levels(self) -> &'static [Level] {
        match self {
            CareerStage::Student => &[Level::Beginner],
            CareerStage::Junior => &[Level::Beginner, Level::Intermediate],
            CareerStage::Mid => &[Level::Intermediate, Level::Advanced],
            CareerStage::Senior => &[Level::Advanced],
            CareerStage::Executive => &[Level::Advanced],
        }
    }

    /// Event formats this stage tends to prefer
    pub fn preferred_event_types(self) -> &'static [EventType] {
        match self {
            CareerStage::Student => &[EventType::Workshop, EventType::Meetup],
            CareerStage::Junior => &[EventType::Workshop, EventType::Conference],
            CareerStage::Mid => &[EventType::Conference, EventType::Networking],
            CareerStage::Senior => &[EventType::Conference, EventType::Networking],
            CareerStage::Executive => &[EventType::Networking, EventType::Conference],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Workshop,
    Meetup,
    Conference,
    Networking,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Workshop => "workshop",
            EventType::Meetup => "meetup",
            EventType::Conference => "conference",
            EventType::Networking => "networking",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// UI language of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ta,
}

/// Writing style for generated posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Enthusiastic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

/// User profile as supplied by the surrounding application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "careerStage")]
    pub career_stage: CareerStage,
    #[serde(rename = "eventsAttended", default)]
    pub events_attended: u32,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(rename = "preferredLanguage", default)]
    pub preferred_language: Language,
}

/// Event as owned by the catalog. Scores are never stored here, see [`ScoredEvent`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: chrono::NaiveDate,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub skills: Vec<String>,
    pub level: Level,
    pub attendees: u32,
    #[serde(rename = "maxAttendees")]
    pub max_attendees: NonZeroU32,
    pub rating: f64,
    pub organizer: String,
    #[serde(default)]
    pub image: String,
}

/// Event view model carrying the derived recommendation fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredEvent {
    #[serde(flatten)]
    pub event: EventRecord,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "attendanceProbability")]
    pub attendance_probability: u8,
}

/// Rendered social post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub content: String,
    pub hashtags: Vec<String>,
    pub tone: Tone,
    #[serde(rename = "shareUrl")]
    pub share_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Presentation,
    Photo,
    Document,
    Certificate,
}

impl FileKind {
    /// Kind assigned to an upload from its MIME type
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.contains("image") {
            FileKind::Photo
        } else {
            FileKind::Presentation
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub content: String,
    pub date: chrono::DateTime<chrono::Utc>,
}

/// File shared to the community hub. Only metadata and a URL are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub url: String,
    #[serde(rename = "uploadedBy")]
    pub uploaded_by: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    #[serde(rename = "uploadDate")]
    pub upload_date: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub rating: u8,
    pub comment: String,
    pub suggestions: String,
    pub date: chrono::NaiveDate,
}

/// Match score weights, in points
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skills: f64,
    pub level: f64,
    pub event_type: f64,
    pub locality: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            level: 30.0,
            event_type: 20.0,
            locality: 10.0,
        }
    }
}

/// Attendance probability weights
#[derive(Debug, Clone, Copy)]
pub struct AttendanceWeights {
    pub match_score: f64,
    pub history: f64,
    pub popularity: f64,
    /// Points awarded for a perfect 5.0 rating
    pub rating: f64,
    /// Events attended that count as a full history rate
    pub history_target: f64,
    /// History rate assumed for users with no attended events
    pub neutral_history_rate: f64,
}

impl Default for AttendanceWeights {
    fn default() -> Self {
        Self {
            match_score: 0.4,
            history: 0.3,
            popularity: 0.2,
            rating: 10.0,
            history_target: 20.0,
            neutral_history_rate: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_tables() {
        assert_eq!(CareerStage::Student.suitable_levels(), &[Level::Beginner]);
        assert!(CareerStage::Mid.suitable_levels().contains(&Level::Advanced));
        assert!(!CareerStage::Senior.suitable_levels().contains(&Level::Intermediate));
        assert!(CareerStage::Executive
            .preferred_event_types()
            .contains(&EventType::Networking));
        assert!(!CareerStage::Mid
            .preferred_event_types()
            .contains(&EventType::Workshop));
    }

    #[test]
    fn test_role_accepts_user_alias() {
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::Regular);
    }

    #[test]
    fn test_unknown_tone_rejected() {
        assert!(serde_json::from_str::<Tone>("\"sarcastic\"").is_err());
        let tone: Tone = serde_json::from_str("\"casual\"").unwrap();
        assert_eq!(tone, Tone::Casual);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let json = r#"{
            "id": "9", "title": "T", "description": "D", "date": "2025-01-15",
            "time": "09:00 AM", "location": "Chennai", "type": "meetup",
            "skills": [], "level": "beginner", "attendees": 0, "maxAttendees": 0,
            "rating": 4.0, "organizer": "O"
        }"#;
        assert!(serde_json::from_str::<EventRecord>(json).is_err());
    }

    #[test]
    fn test_file_kind_from_mime() {
        assert_eq!(FileKind::from_mime("image/png"), FileKind::Photo);
        assert_eq!(FileKind::from_mime("application/pdf"), FileKind::Presentation);
    }
}
