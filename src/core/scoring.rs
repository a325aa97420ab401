use crate::models::{EventRecord, ScoringWeights, UserProfile};

/// Calculate a match score (0-100) for an event based on a user profile
///
/// Scoring formula (default weights, in points):
/// score = (
///     skill_overlap * 40 +     # Share of event skills the user has
///     level_fit * 30 +         # Event level suits the career stage
///     type_preference * 20 +   # Event format suits the career stage
///     locality * 10            # Always awarded
/// )
pub fn calculate_match_score(
    user: &UserProfile,
    event: &EventRecord,
    weights: &ScoringWeights,
) -> u8 {
    let skill_score = calculate_skill_overlap(&user.skills, &event.skills);

    let level_score = if user.career_stage.suitable_levels().contains(&event.level) {
        1.0
    } else {
        0.0
    };

    let type_score = if user
        .career_stage
        .preferred_event_types()
        .contains(&event.event_type)
    {
        1.0
    } else {
        0.0
    };

    // No location data is compared yet, every event counts as local
    let locality_score = 1.0;

    let total_score = skill_score * weights.skills
        + level_score * weights.level
        + type_score * weights.event_type
        + locality_score * weights.locality;

    clamp_percentage(total_score)
}

/// Share (0-1) of event skills matched by any user skill
///
/// A skill matches when either lowercased string contains the other.
#[inline]
pub fn calculate_skill_overlap(user_skills: &[String], event_skills: &[String]) -> f64 {
    if event_skills.is_empty() {
        return 0.0;
    }

    let user_skills: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();

    let matched = event_skills
        .iter()
        .filter(|skill| {
            let skill = skill.to_lowercase();
            user_skills
                .iter()
                .any(|user_skill| user_skill.contains(&skill) || skill.contains(user_skill.as_str()))
        })
        .count();

    matched as f64 / event_skills.len() as f64
}

/// Round and clamp a score into 0-100
#[inline]
pub(crate) fn clamp_percentage(score: f64) -> u8 {
    if score.is_nan() {
        return 0;
    }
    score.round().clamp(0.0, 100.0) as u8
}
