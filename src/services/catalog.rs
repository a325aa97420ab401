use std::num::NonZeroU32;
use chrono::{NaiveDate, TimeZone, Utc};
use thiserror::Error;
use crate::models::{
    Badge, CareerStage, Comment, EventRecord, EventType, Feedback, FileKind, Language, Level,
    Role, SharedFile, UserProfile,
};

/// Errors that can occur when reading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Event not found: {0}")]
    EventNotFound(String),
}

/// Read-only in-memory source of the current user, events and feedback
///
/// Stands in for a backend: the records are seeded once and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    user: UserProfile,
    events: Vec<EventRecord>,
    feedback: Vec<Feedback>,
}

impl Catalog {
    pub fn new(user: UserProfile, events: Vec<EventRecord>, feedback: Vec<Feedback>) -> Self {
        Self {
            user,
            events,
            feedback,
        }
    }

    /// Catalog populated with the built-in demo data
    pub fn seeded() -> Self {
        Self::new(seed_user(), seed_events(), seed_feedback())
    }

    pub fn current_user(&self) -> &UserProfile {
        &self.user
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn event(&self, event_id: &str) -> Result<&EventRecord, CatalogError> {
        self.events
            .iter()
            .find(|event| event.id == event_id)
            .ok_or_else(|| CatalogError::EventNotFound(event_id.to_string()))
    }

    /// Feedback left for an event
    pub fn feedback_for(&self, event_id: &str) -> Vec<&Feedback> {
        self.feedback
            .iter()
            .filter(|feedback| feedback.event_id == event_id)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn capacity(max_attendees: u32) -> NonZeroU32 {
    NonZeroU32::new(max_attendees).unwrap_or(NonZeroU32::MIN)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn seed_user() -> UserProfile {
    UserProfile {
        id: "1".to_string(),
        name: "Priya Krishnan".to_string(),
        email: "priya.krishnan@email.com".to_string(),
        role: Role::Regular,
        avatar: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop".to_string(),
        skills: strings(&["React", "Node.js", "Python", "Machine Learning", "UI/UX Design"]),
        interests: strings(&["Web Development", "AI/ML", "Startup Culture", "Tech Leadership"]),
        career_stage: CareerStage::Mid,
        events_attended: 12,
        badges: vec![
            Badge {
                id: "1".to_string(),
                name: "Top Attendee".to_string(),
                description: "Attended 10+ events".to_string(),
                icon: "Trophy".to_string(),
                color: "text-yellow-500".to_string(),
            },
            Badge {
                id: "2".to_string(),
                name: "Community Contributor".to_string(),
                description: "Shared 5+ files with community".to_string(),
                icon: "Users".to_string(),
                color: "text-blue-500".to_string(),
            },
        ],
        preferred_language: Language::En,
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_event(
    id: &str,
    title: &str,
    description: &str,
    date: NaiveDate,
    time: &str,
    location: &str,
    event_type: EventType,
    skills: &[&str],
    level: Level,
    attendees: u32,
    max_attendees: u32,
    rating: f64,
    organizer: &str,
    image: &str,
) -> EventRecord {
    EventRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date,
        time: time.to_string(),
        location: location.to_string(),
        event_type,
        skills: strings(skills),
        level,
        attendees,
        max_attendees: capacity(max_attendees),
        rating,
        organizer: organizer.to_string(),
        image: image.to_string(),
    }
}

fn seed_events() -> Vec<EventRecord> {
    vec![
        seed_event(
            "1",
            "React Advanced Patterns Workshop",
            "Deep dive into advanced React patterns including render props, compound components, and hooks patterns.",
            date(2025, 1, 15),
            "09:00 AM",
            "Chennai Tech Hub",
            EventType::Workshop,
            &["React", "JavaScript", "Frontend Development"],
            Level::Advanced,
            45,
            60,
            4.8,
            "TechEvents Chennai",
            "https://images.pexels.com/photos/270348/pexels-photo-270348.jpeg?auto=compress&cs=tinysrgb&w=600&h=300&fit=crop",
        ),
        seed_event(
            "2",
            "AI/ML Career Networking Meetup",
            "Connect with AI/ML professionals and explore career opportunities in the field.",
            date(2025, 1, 18),
            "06:30 PM",
            "Coimbatore Innovation Center",
            EventType::Networking,
            &["Machine Learning", "Python", "Data Science"],
            Level::Intermediate,
            78,
            100,
            4.6,
            "AI Chennai",
            "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=600&h=300&fit=crop",
        ),
        seed_event(
            "3",
            "Startup Pitch Competition 2025",
            "Present your startup idea to a panel of investors and industry experts.",
            date(2025, 1, 22),
            "10:00 AM",
            "Madurai Startup Hub",
            EventType::Conference,
            &["Business Development", "Pitch Presentation", "Entrepreneurship"],
            Level::Intermediate,
            120,
            150,
            4.7,
            "Tamil Nadu Startup Mission",
            "https://images.pexels.com/photos/7688336/pexels-photo-7688336.jpeg?auto=compress&cs=tinysrgb&w=600&h=300&fit=crop",
        ),
        seed_event(
            "4",
            "Full Stack Development Bootcamp",
            "Comprehensive 3-day bootcamp covering modern full-stack development technologies.",
            date(2025, 1, 25),
            "09:00 AM",
            "Trichy Tech Park",
            EventType::Workshop,
            &["React", "Node.js", "MongoDB", "Express.js"],
            Level::Beginner,
            32,
            40,
            4.9,
            "CodeCraft Academy",
            "https://images.pexels.com/photos/574077/pexels-photo-574077.jpeg?auto=compress&cs=tinysrgb&w=600&h=300&fit=crop",
        ),
        seed_event(
            "5",
            "Women in Tech Leadership Summit",
            "Empowering women leaders in technology with inspiring talks and networking opportunities.",
            date(2025, 1, 28),
            "02:00 PM",
            "Salem Convention Center",
            EventType::Conference,
            &["Leadership", "Tech Management", "Career Development"],
            Level::Intermediate,
            95,
            120,
            4.8,
            "Women Tech Leaders TN",
            "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=600&h=300&fit=crop",
        ),
    ]
}

fn seed_feedback() -> Vec<Feedback> {
    vec![Feedback {
        id: "1".to_string(),
        user_id: "1".to_string(),
        event_id: "1".to_string(),
        rating: 5,
        comment: "Excellent workshop with hands-on exercises. Learned a lot about advanced React patterns.".to_string(),
        suggestions: "Maybe include more real-world examples.".to_string(),
        date: date(2025, 1, 10),
    }]
}

/// Files already shared when the hub starts
pub fn seed_shared_files() -> Vec<SharedFile> {
    let at = |year, month, day| {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .unwrap_or_default()
    };

    vec![
        SharedFile {
            id: "1".to_string(),
            name: "React Patterns Presentation.pdf".to_string(),
            kind: FileKind::Presentation,
            url: "#".to_string(),
            uploaded_by: "John Doe".to_string(),
            event_id: "1".to_string(),
            upload_date: at(2025, 1, 10),
            comments: vec![Comment {
                id: "1".to_string(),
                user_id: "2".to_string(),
                user_name: "Sarah Wilson".to_string(),
                content: "Great presentation! Really helped understand compound components.".to_string(),
                date: at(2025, 1, 11),
            }],
        },
        SharedFile {
            id: "2".to_string(),
            name: "Event Photo - Group Discussion.jpg".to_string(),
            kind: FileKind::Photo,
            url: "https://images.pexels.com/photos/1595391/pexels-photo-1595391.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop".to_string(),
            uploaded_by: "Mike Johnson".to_string(),
            event_id: "1".to_string(),
            upload_date: at(2025, 1, 12),
            comments: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();

        assert_eq!(catalog.current_user().name, "Priya Krishnan");
        assert_eq!(catalog.events().len(), 5);
        assert_eq!(catalog.feedback_for("1").len(), 1);
        assert!(catalog.feedback_for("3").is_empty());
    }

    #[test]
    fn test_event_lookup() {
        let catalog = Catalog::seeded();

        assert_eq!(catalog.event("4").unwrap().title, "Full Stack Development Bootcamp");
        assert!(matches!(
            catalog.event("missing"),
            Err(CatalogError::EventNotFound(id)) if id == "missing"
        ));
    }

    #[test]
    fn test_seed_capacity_is_nonzero() {
        for event in Catalog::seeded().events() {
            assert!(event.attendees <= event.max_attendees.get());
        }
    }
}
