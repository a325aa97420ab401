//! Career analytics for the current user
//!
//! Static series behind the analytics dashboard, plus the highlights derived
//! from them. Rendering the charts is left to the client.

use serde::{Deserialize, Serialize};

/// Events attended in a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAttendance {
    pub month: String,
    pub events: u32,
}

/// Self-assessed skill level before and after attending events, 0-100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProgress {
    pub skill: String,
    pub before: u8,
    pub after: u8,
}

impl SkillProgress {
    pub fn gain(&self) -> i16 {
        i16::from(self.after) - i16::from(self.before)
    }
}

/// Share of attended events per event type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTypeShare {
    pub name: String,
    pub value: u32,
    pub color: String,
}

/// Cumulative career figures at the end of a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerProgress {
    pub month: String,
    pub connections: u32,
    pub skills: u32,
    pub events: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillImprovement {
    pub skill: String,
    pub gain: i16,
}

/// Headline cards shown under the charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlights {
    #[serde(rename = "mostActiveMonth")]
    pub most_active_month: Option<MonthlyAttendance>,
    #[serde(rename = "topSkillImprovement")]
    pub top_skill_improvement: Option<SkillImprovement>,
    /// Connections gained between the first and last month
    #[serde(rename = "networkGrowth")]
    pub network_growth: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    #[serde(rename = "eventAttendance")]
    pub event_attendance: Vec<MonthlyAttendance>,
    #[serde(rename = "skillDevelopment")]
    pub skill_development: Vec<SkillProgress>,
    #[serde(rename = "eventTypes")]
    pub event_types: Vec<EventTypeShare>,
    #[serde(rename = "careerProgress")]
    pub career_progress: Vec<CareerProgress>,
    pub highlights: Highlights,
}

impl AnalyticsReport {
    pub fn new(
        event_attendance: Vec<MonthlyAttendance>,
        skill_development: Vec<SkillProgress>,
        event_types: Vec<EventTypeShare>,
        career_progress: Vec<CareerProgress>,
    ) -> Self {
        let highlights = Highlights {
            most_active_month: most_active_month(&event_attendance).cloned(),
            top_skill_improvement: top_skill_improvement(&skill_development),
            network_growth: network_growth(&career_progress),
        };

        Self {
            event_attendance,
            skill_development,
            event_types,
            career_progress,
            highlights,
        }
    }

    /// Report built from the built-in demo series
    pub fn seeded() -> Self {
        Self::new(
            seed_event_attendance(),
            seed_skill_development(),
            seed_event_types(),
            seed_career_progress(),
        )
    }

    /// Latest connection count, 0 without any history
    pub fn network_connections(&self) -> u32 {
        self.career_progress
            .last()
            .map(|progress| progress.connections)
            .unwrap_or(0)
    }
}

impl Default for AnalyticsReport {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Month with the most events. The earliest month wins a tie.
pub fn most_active_month(series: &[MonthlyAttendance]) -> Option<&MonthlyAttendance> {
    series.iter().fold(None, |best, month| match best {
        Some(current) if current.events >= month.events => Some(current),
        _ => Some(month),
    })
}

/// Skill with the largest before/after gain. The first listed wins a tie.
pub fn top_skill_improvement(series: &[SkillProgress]) -> Option<SkillImprovement> {
    series
        .iter()
        .fold(None::<&SkillProgress>, |best, skill| match best {
            Some(current) if current.gain() >= skill.gain() => Some(current),
            _ => Some(skill),
        })
        .map(|skill| SkillImprovement {
            skill: skill.skill.clone(),
            gain: skill.gain(),
        })
}

pub fn network_growth(series: &[CareerProgress]) -> i64 {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) => i64::from(last.connections) - i64::from(first.connections),
        _ => 0,
    }
}

fn seed_event_attendance() -> Vec<MonthlyAttendance> {
    [("Jul", 2), ("Aug", 4), ("Sep", 3), ("Oct", 5), ("Nov", 2), ("Dec", 6), ("Jan", 8)]
        .into_iter()
        .map(|(month, events)| MonthlyAttendance {
            month: month.to_string(),
            events,
        })
        .collect()
}

fn seed_skill_development() -> Vec<SkillProgress> {
    [("React", 60, 85), ("Node.js", 45, 70), ("Python", 70, 80), ("ML", 30, 65), ("UI/UX", 55, 75)]
        .into_iter()
        .map(|(skill, before, after)| SkillProgress {
            skill: skill.to_string(),
            before,
            after,
        })
        .collect()
}

fn seed_event_types() -> Vec<EventTypeShare> {
    [
        ("Workshops", 8, "#3B82F6"),
        ("Meetups", 5, "#8B5CF6"),
        ("Conferences", 3, "#10B981"),
        ("Networking", 2, "#F59E0B"),
    ]
    .into_iter()
    .map(|(name, value, color)| EventTypeShare {
        name: name.to_string(),
        value,
        color: color.to_string(),
    })
    .collect()
}

fn seed_career_progress() -> Vec<CareerProgress> {
    [
        ("Jul 2024", 45, 3, 2),
        ("Aug 2024", 62, 4, 6),
        ("Sep 2024", 78, 4, 9),
        ("Oct 2024", 95, 5, 14),
        ("Nov 2024", 108, 5, 16),
        ("Dec 2024", 120, 6, 20),
        ("Jan 2025", 127, 7, 22),
    ]
    .into_iter()
    .map(|(month, connections, skills, events)| CareerProgress {
        month: month.to_string(),
        connections,
        skills,
        events,
    })
    .collect()
}
