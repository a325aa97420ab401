use crate::core::scoring::clamp_percentage;
use crate::models::{AttendanceWeights, EventRecord, UserProfile};

/// Estimate how likely (0-100) a user is to attend an event
///
/// probability = (
///     match_score * 0.4 +
///     history_rate * 0.3 +       # min(attended / 20 * 100, 100), 50 for new users
///     fill_rate * 0.2 +          # attendees / capacity * 100
///     rating / 5 * 10
/// )
///
/// The rating is not range-checked; only the final sum is clamped.
pub fn calculate_attendance_probability(
    user: &UserProfile,
    event: &EventRecord,
    match_score: u8,
    weights: &AttendanceWeights,
) -> u8 {
    let history_rate = calculate_history_rate(user.events_attended, weights);

    let popularity = event.attendees as f64 / event.max_attendees.get() as f64 * 100.0;

    let probability = match_score as f64 * weights.match_score
        + history_rate * weights.history
        + popularity * weights.popularity
        + (event.rating / 5.0) * weights.rating;

    clamp_percentage(probability)
}

/// Historical engagement rate (0-100)
#[inline]
fn calculate_history_rate(events_attended: u32, weights: &AttendanceWeights) -> f64 {
    if events_attended == 0 {
        return weights.neutral_history_rate;
    }

    (events_attended as f64 / weights.history_target * 100.0).min(100.0)
}
