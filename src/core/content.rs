use crate::models::{EventRecord, EventType, GeneratedPost, Tone};

/// Hashtags attached to every post
const BASE_HASHTAGS: [&str; 4] = ["TechEvents", "CareerGrowth", "Learning", "Networking"];

/// Regional hashtag closing every tag list
const REGIONAL_HASHTAG: &str = "TamilNaduTech";

const LINKEDIN_SHARE_URL: &str = "https://www.linkedin.com/sharing/share-offsite/?url=&text=";

/// Fixed phrases making up a tone
#[derive(Debug, Clone, Copy)]
pub struct ToneTemplate {
    pub opening: &'static str,
    pub key_learnings: &'static str,
    pub closing: &'static str,
}

impl Tone {
    pub fn template(self) -> ToneTemplate {
        match self {
            Tone::Professional => ToneTemplate {
                opening: "I recently had the opportunity to attend",
                key_learnings: "Key takeaways from the session:",
                closing: "Looking forward to applying these insights in my professional journey.",
            },
            Tone::Casual => ToneTemplate {
                opening: "Just wrapped up an amazing",
                key_learnings: "Some cool things I learned:",
                closing: "Great way to spend the day learning and networking!",
            },
            Tone::Enthusiastic => ToneTemplate {
                opening: "What an incredible experience at",
                key_learnings: "Mind-blown by these insights:",
                closing: "Can't wait to implement these learnings! Who else was there?",
            },
        }
    }
}

/// Hashtag pair for an event format
fn type_hashtags(event_type: EventType) -> [&'static str; 2] {
    match event_type {
        EventType::Workshop => ["Workshop", "HandsOn"],
        EventType::Meetup => ["Meetup", "Community"],
        EventType::Conference => ["Conference", "TechTalk"],
        EventType::Networking => ["Networking", "Connections"],
    }
}

/// Build the hashtag list for an event
///
/// Order: base tags, one tag per skill with whitespace removed, the event type
/// pair, then the regional tag. Duplicates are kept.
pub fn generate_hashtags(event: &EventRecord) -> Vec<String> {
    let skill_tags = event
        .skills
        .iter()
        .map(|skill| skill.chars().filter(|c| !c.is_whitespace()).collect::<String>());

    BASE_HASHTAGS
        .iter()
        .map(|tag| tag.to_string())
        .chain(skill_tags)
        .chain(type_hashtags(event.event_type).iter().map(|tag| tag.to_string()))
        .chain(std::iter::once(REGIONAL_HASHTAG.to_string()))
        .collect()
}

/// Render the post body for an event
///
/// The experience text is inserted verbatim.
pub fn generate_post(event: &EventRecord, experience: &str, tone: Tone) -> String {
    render_post(event, experience, tone, &generate_hashtags(event))
}

/// Render the post and bundle it with its hashtags and a share link
pub fn compose_post(event: &EventRecord, experience: &str, tone: Tone) -> GeneratedPost {
    let hashtags = generate_hashtags(event);
    let content = render_post(event, experience, tone, &hashtags);
    let share_url = linkedin_share_url(&content);

    GeneratedPost {
        content,
        hashtags,
        tone,
        share_url,
    }
}

/// LinkedIn share link prefilled with the post text
pub fn linkedin_share_url(content: &str) -> String {
    format!("{}{}", LINKEDIN_SHARE_URL, urlencoding::encode(content))
}

fn render_post(event: &EventRecord, experience: &str, tone: Tone, hashtags: &[String]) -> String {
    let template = tone.template();
    let tags = hashtags
        .iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{opening} {title}! 🚀\n\
         \n\
         {experience}\n\
         \n\
         {key_learnings}\n\
         • Practical {skills} techniques\n\
         • Networking with industry professionals\n\
         • Latest trends in {event_type} development\n\
         \n\
         {closing}\n\
         \n\
         Thanks to {organizer} for organizing such a valuable session.\n\
         \n\
         {tags}",
        opening = template.opening,
        title = event.title,
        experience = experience,
        key_learnings = template.key_learnings,
        skills = event.skills.join(" & "),
        event_type = event.event_type,
        closing = template.closing,
        organizer = event.organizer,
        tags = tags,
    )
}
