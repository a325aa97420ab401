use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::filters::SortBy;
use crate::models::domain::{EventType, Language, Level, Tone};

/// Query for browsing events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseEventsQuery {
    #[serde(default)]
    pub search: String,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub level: Option<Level>,
    #[serde(default)]
    pub sort: SortBy,
}

/// Request to generate a social post
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeneratePostRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "event_id", rename = "eventId")]
    pub event_id: String,
    #[validate(length(min = 1))]
    pub experience: String,
    #[serde(default)]
    pub tone: Tone,
}

/// Query for listing community files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFilesQuery {
    #[serde(default)]
    pub tab: crate::services::community::FileTab,
}

/// Request to share a file with the community
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShareFileRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(alias = "mime_type", rename = "mimeType", default)]
    pub mime_type: String,
    #[validate(length(min = 1))]
    pub url: String,
    #[validate(length(min = 1))]
    #[serde(alias = "event_id", rename = "eventId")]
    pub event_id: String,
}

/// Request to comment on a shared file
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1))]
    pub content: String,
}

/// Request to change the current user's UI language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLanguageRequest {
    pub language: Language,
}
