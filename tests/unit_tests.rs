// Unit tests for EventHub

use eventhub::core::{
    attendance::calculate_attendance_probability,
    content::{generate_hashtags, generate_post},
    scoring::{calculate_match_score, calculate_skill_overlap},
};
use eventhub::models::{
    AttendanceWeights, CareerStage, EventRecord, EventType, Language, Level, Role, ScoringWeights,
    Tone, UserProfile,
};
use std::num::NonZeroU32;

fn create_user(stage: CareerStage, skills: &[&str], events_attended: u32) -> UserProfile {
    UserProfile {
        id: "1".to_string(),
        name: "Priya Krishnan".to_string(),
        email: "priya.krishnan@email.com".to_string(),
        role: Role::Regular,
        avatar: String::new(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        interests: vec![],
        career_stage: stage,
        events_attended,
        badges: vec![],
        preferred_language: Language::En,
    }
}

fn create_event(
    skills: &[&str],
    level: Level,
    event_type: EventType,
    attendees: u32,
    max_attendees: u32,
    rating: f64,
) -> EventRecord {
    EventRecord {
        id: "1".to_string(),
        title: "React Advanced Patterns Workshop".to_string(),
        description: "Deep dive into advanced React patterns.".to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        time: "09:00 AM".to_string(),
        location: "Chennai Tech Hub".to_string(),
        event_type,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        level,
        attendees,
        max_attendees: NonZeroU32::new(max_attendees).unwrap(),
        rating,
        organizer: "TechEvents Chennai".to_string(),
        image: String::new(),
    }
}

fn scenario_user() -> UserProfile {
    create_user(
        CareerStage::Mid,
        &["React", "Node.js", "Python", "Machine Learning", "UI/UX Design"],
        12,
    )
}

fn scenario_event() -> EventRecord {
    create_event(
        &["React", "JavaScript", "Frontend Development"],
        Level::Advanced,
        EventType::Workshop,
        45,
        60,
        4.8,
    )
}

#[test]
fn test_scenario_match_score_and_probability() {
    let user = scenario_user();
    let event = scenario_event();

    let match_score = calculate_match_score(&user, &event, &ScoringWeights::default());
    assert_eq!(match_score, 53);

    let probability =
        calculate_attendance_probability(&user, &event, match_score, &AttendanceWeights::default());
    assert_eq!(probability, 64);
}

#[test]
fn test_empty_skills_contribute_nothing() {
    let user = scenario_user();
    let mut event = scenario_event();
    event.skills.clear();

    assert_eq!(calculate_skill_overlap(&user.skills, &event.skills), 0.0);
    // 0 + 30 + 0 + 10
    assert_eq!(calculate_match_score(&user, &event, &ScoringWeights::default()), 40);
}

#[test]
fn test_match_score_monotonic_in_matching_skills() {
    let user = create_user(CareerStage::Junior, &["React", "Python", "Docker"], 0);
    let weights = ScoringWeights::default();

    let pool = ["React", "Python", "Docker"];
    let mut previous = 0;
    for matched in 0..=pool.len() {
        let mut skills: Vec<&str> = pool[..matched].to_vec();
        skills.resize(pool.len(), "COBOL");
        let event = create_event(&skills, Level::Beginner, EventType::Meetup, 10, 20, 4.0);

        let score = calculate_match_score(&user, &event, &weights);
        assert!(score >= previous, "{} matches scored {} < {}", matched, score, previous);
        previous = score;
    }
    assert_eq!(previous, 80);
}

#[test]
fn test_scores_stay_in_range_across_stages() {
    let stages = [
        CareerStage::Student,
        CareerStage::Junior,
        CareerStage::Mid,
        CareerStage::Senior,
        CareerStage::Executive,
    ];
    let levels = [Level::Beginner, Level::Intermediate, Level::Advanced];
    let types = [
        EventType::Workshop,
        EventType::Meetup,
        EventType::Conference,
        EventType::Networking,
    ];

    for stage in stages {
        let user = create_user(stage, &["React", "Leadership"], 25);
        for level in levels {
            for event_type in types {
                let event = create_event(&["React", "Leadership"], level, event_type, 500, 10, 7.5);
                let score = calculate_match_score(&user, &event, &ScoringWeights::default());
                let probability = calculate_attendance_probability(
                    &user,
                    &event,
                    score,
                    &AttendanceWeights::default(),
                );
                assert!(score <= 100);
                assert!(probability <= 100);
            }
        }
    }
}

#[test]
fn test_new_user_gets_neutral_history() {
    let event = scenario_event();
    let newcomer = create_user(CareerStage::Mid, &["React"], 0);
    let regular = create_user(CareerStage::Mid, &["React"], 10);

    // Both have a history rate of 50
    let weights = AttendanceWeights::default();
    assert_eq!(
        calculate_attendance_probability(&newcomer, &event, 50, &weights),
        calculate_attendance_probability(&regular, &event, 50, &weights)
    );
}

#[test]
fn test_hashtags_scenario() {
    let event = create_event(
        &["Machine Learning", "Python"],
        Level::Intermediate,
        EventType::Networking,
        78,
        100,
        4.6,
    );

    let expected: Vec<String> = [
        "TechEvents",
        "CareerGrowth",
        "Learning",
        "Networking",
        "MachineLearning",
        "Python",
        "Networking",
        "Connections",
        "TamilNaduTech",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    assert_eq!(generate_hashtags(&event), expected);
}

#[test]
fn test_hashtags_always_have_base_and_regional_tags() {
    for event_type in [
        EventType::Workshop,
        EventType::Meetup,
        EventType::Conference,
        EventType::Networking,
    ] {
        let event = create_event(&[], Level::Beginner, event_type, 1, 2, 3.0);
        let tags = generate_hashtags(&event);

        assert_eq!(&tags[..4], &["TechEvents", "CareerGrowth", "Learning", "Networking"]);
        assert_eq!(tags.last().map(String::as_str), Some("TamilNaduTech"));
        assert_eq!(tags.len(), 7);
    }
}

#[test]
fn test_generate_post_is_deterministic() {
    let event = scenario_event();

    for tone in [Tone::Professional, Tone::Casual, Tone::Enthusiastic] {
        let first = generate_post(&event, "Learned a lot about hooks.", tone);
        let second = generate_post(&event, "Learned a lot about hooks.", tone);
        assert_eq!(first, second);
    }
}

#[test]
fn test_generate_post_professional() {
    let post = generate_post(&scenario_event(), "Loved it.", Tone::Professional);

    assert!(post.starts_with(
        "I recently had the opportunity to attend React Advanced Patterns Workshop! 🚀"
    ));
    assert!(post.contains("Key takeaways from the session:"));
    assert!(post.contains("• Practical React & JavaScript & Frontend Development techniques"));
    assert!(post.contains("• Latest trends in workshop development"));
    assert!(post.contains("Thanks to TechEvents Chennai for organizing such a valuable session."));
    assert!(post.ends_with("#Workshop #HandsOn #TamilNaduTech"));
}
