// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AttendanceWeights, Badge, CareerStage, Comment, EventRecord, EventType, Feedback, FileKind,
    GeneratedPost, Language, Level, Role, ScoredEvent, ScoringWeights, SharedFile, Tone,
    UserProfile,
};
pub use requests::{AddCommentRequest, BrowseEventsQuery, GeneratePostRequest, ListFilesQuery, ShareFileRequest, UpdateLanguageRequest};
pub use responses::{BrowseEventsResponse, DashboardResponse, ErrorResponse, HealthResponse, TranslationResponse};
