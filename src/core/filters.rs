use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use crate::models::{EventRecord, EventType, Level, ScoredEvent};

/// Browse filters applied to the event list
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub search: String,
    pub event_type: Option<EventType>,
    pub level: Option<Level>,
}

/// Ordering of the browsed event list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Highest match score first
    #[default]
    Match,
    /// Highest attendance probability first
    Probability,
    /// Earliest date first
    Date,
}

/// Check if an event passes the search, type and level filters
#[inline]
pub fn matches_filter(event: &EventRecord, filter: &EventFilter) -> bool {
    if let Some(event_type) = filter.event_type {
        if event.event_type != event_type {
            return false;
        }
    }

    if let Some(level) = filter.level {
        if event.level != level {
            return false;
        }
    }

    matches_search(event, &filter.search)
}

/// Case-insensitive search over title, description and skills
#[inline]
pub fn matches_search(event: &EventRecord, search: &str) -> bool {
    let needle = search.to_lowercase();

    event.title.to_lowercase().contains(&needle)
        || event.description.to_lowercase().contains(&needle)
        || event
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
}

/// Sort scored events in place. Ties keep their incoming order.
pub fn sort_events(events: &mut [ScoredEvent], sort: SortBy) {
    events.sort_by(|a, b| compare_events(a, b, sort));
}

fn compare_events(a: &ScoredEvent, b: &ScoredEvent, sort: SortBy) -> Ordering {
    match sort {
        SortBy::Match => b.match_score.cmp(&a.match_score),
        SortBy::Probability => b.attendance_probability.cmp(&a.attendance_probability),
        SortBy::Date => a.event.date.cmp(&b.event.date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn create_test_event(id: &str, title: &str, event_type: EventType, level: Level) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: "Hands-on sessions with mentors".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            time: "09:00 AM".to_string(),
            location: "Chennai".to_string(),
            event_type,
            skills: vec!["Machine Learning".to_string()],
            level,
            attendees: 10,
            max_attendees: NonZeroU32::new(20).unwrap(),
            rating: 4.0,
            organizer: "Organizer".to_string(),
            image: String::new(),
        }
    }

    fn scored(event: EventRecord, match_score: u8, attendance_probability: u8) -> ScoredEvent {
        ScoredEvent {
            event,
            match_score,
            attendance_probability,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let event = create_test_event("1", "React Workshop", EventType::Workshop, Level::Advanced);
        assert!(matches_filter(&event, &EventFilter::default()));
    }

    #[test]
    fn test_search_fields() {
        let event = create_test_event("1", "React Workshop", EventType::Workshop, Level::Advanced);

        assert!(matches_search(&event, "react"));
        assert!(matches_search(&event, "MENTORS"));
        assert!(matches_search(&event, "machine"));
        assert!(!matches_search(&event, "kubernetes"));
    }

    #[test]
    fn test_type_and_level_filters() {
        let event = create_test_event("1", "React Workshop", EventType::Workshop, Level::Advanced);

        let wrong_type = EventFilter {
            event_type: Some(EventType::Meetup),
            ..EventFilter::default()
        };
        assert!(!matches_filter(&event, &wrong_type));

        let wrong_level = EventFilter {
            level: Some(Level::Beginner),
            ..EventFilter::default()
        };
        assert!(!matches_filter(&event, &wrong_level));

        let exact = EventFilter {
            search: "workshop".to_string(),
            event_type: Some(EventType::Workshop),
            level: Some(Level::Advanced),
        };
        assert!(matches_filter(&event, &exact));
    }

    #[test]
    fn test_sort_orders() {
        let mut early = create_test_event("early", "A", EventType::Meetup, Level::Beginner);
        early.date = chrono::NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let late = create_test_event("late", "B", EventType::Meetup, Level::Beginner);

        let mut events = vec![scored(late, 90, 40), scored(early, 60, 80)];

        sort_events(&mut events, SortBy::Probability);
        assert_eq!(events[0].event.id, "early");

        sort_events(&mut events, SortBy::Match);
        assert_eq!(events[0].event.id, "late");

        sort_events(&mut events, SortBy::Date);
        assert_eq!(events[0].event.id, "early");
    }

    #[test]
    fn test_sort_is_stable() {
        let first = create_test_event("first", "A", EventType::Meetup, Level::Beginner);
        let second = create_test_event("second", "B", EventType::Meetup, Level::Beginner);

        let mut events = vec![scored(first, 70, 70), scored(second, 70, 70)];
        sort_events(&mut events, SortBy::Match);

        assert_eq!(events[0].event.id, "first");
        assert_eq!(events[1].event.id, "second");
    }
}
