use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use crate::models::{Comment, FileKind, SharedFile, UserProfile};

/// Errors that can occur with community hub operations
#[derive(Debug, Error)]
pub enum CommunityError {
    #[error("Shared file not found: {0}")]
    FileNotFound(String),

    #[error("Comment must not be empty")]
    EmptyComment,

    #[error("File name must not be empty")]
    EmptyName,
}

/// Tab selecting which shared files are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileTab {
    #[default]
    All,
    Presentations,
    Photos,
    Certificates,
}

impl FileTab {
    pub fn includes(self, kind: FileKind) -> bool {
        match self {
            FileTab::All => true,
            FileTab::Presentations => kind == FileKind::Presentation,
            FileTab::Photos => kind == FileKind::Photo,
            FileTab::Certificates => kind == FileKind::Certificate,
        }
    }
}

/// Metadata for a file being shared. The bytes live wherever `url` points.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub url: String,
    pub event_id: String,
}

/// In-memory community hub of shared files and their comments
///
/// Cheap to clone; clones share the same file list.
#[derive(Debug, Clone, Default)]
pub struct CommunityHub {
    files: Arc<RwLock<Vec<SharedFile>>>,
}

impl CommunityHub {
    pub fn new(files: Vec<SharedFile>) -> Self {
        Self {
            files: Arc::new(RwLock::new(files)),
        }
    }

    /// Files visible under a tab, in stored order
    pub async fn list(&self, tab: FileTab) -> Vec<SharedFile> {
        let files = self.files.read().await;
        files
            .iter()
            .filter(|file| tab.includes(file.kind))
            .cloned()
            .collect()
    }

    /// Share a file on behalf of a user; it goes to the front of the list
    pub async fn share(
        &self,
        user: &UserProfile,
        upload: FileUpload,
    ) -> Result<SharedFile, CommunityError> {
        if upload.name.trim().is_empty() {
            return Err(CommunityError::EmptyName);
        }

        let file = SharedFile {
            id: uuid::Uuid::new_v4().to_string(),
            kind: FileKind::from_mime(&upload.mime_type),
            name: upload.name,
            url: upload.url,
            uploaded_by: user.name.clone(),
            event_id: upload.event_id,
            upload_date: chrono::Utc::now(),
            comments: vec![],
        };

        let mut files = self.files.write().await;
        files.insert(0, file.clone());
        drop(files);

        tracing::info!("User {} shared {} ({:?})", user.id, file.name, file.kind);
        Ok(file)
    }

    /// Append a comment to a shared file
    pub async fn add_comment(
        &self,
        file_id: &str,
        user: &UserProfile,
        content: &str,
    ) -> Result<Comment, CommunityError> {
        if content.trim().is_empty() {
            return Err(CommunityError::EmptyComment);
        }

        let mut files = self.files.write().await;
        let file = files
            .iter_mut()
            .find(|file| file.id == file_id)
            .ok_or_else(|| CommunityError::FileNotFound(file_id.to_string()))?;

        let comment = Comment {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            content: content.to_string(),
            date: chrono::Utc::now(),
        };
        file.comments.push(comment.clone());

        tracing::debug!("User {} commented on file {}", user.id, file_id);
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::{seed_shared_files, Catalog};

    fn upload(name: &str, mime_type: &str) -> FileUpload {
        FileUpload {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            url: "blob:local/123".to_string(),
            event_id: "1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_by_tab() {
        let hub = CommunityHub::new(seed_shared_files());

        assert_eq!(hub.list(FileTab::All).await.len(), 2);
        assert_eq!(hub.list(FileTab::Photos).await.len(), 1);
        assert_eq!(hub.list(FileTab::Presentations).await.len(), 1);
        assert!(hub.list(FileTab::Certificates).await.is_empty());
    }

    #[tokio::test]
    async fn test_share_goes_to_front() {
        let catalog = Catalog::seeded();
        let hub = CommunityHub::new(seed_shared_files());

        let shared = hub
            .share(catalog.current_user(), upload("meetup.png", "image/png"))
            .await
            .unwrap();

        assert_eq!(shared.kind, FileKind::Photo);
        assert_eq!(shared.uploaded_by, "Priya Krishnan");

        let files = hub.list(FileTab::All).await;
        assert_eq!(files.len(), 3);
        assert_eq!(files[0].id, shared.id);
    }

    #[tokio::test]
    async fn test_share_rejects_blank_name() {
        let catalog = Catalog::seeded();
        let hub = CommunityHub::default();

        let result = hub.share(catalog.current_user(), upload("  ", "application/pdf")).await;
        assert!(matches!(result, Err(CommunityError::EmptyName)));
    }

    #[tokio::test]
    async fn test_add_comment() {
        let catalog = Catalog::seeded();
        let hub = CommunityHub::new(seed_shared_files());

        let comment = hub
            .add_comment("2", catalog.current_user(), "Nice photo!")
            .await
            .unwrap();
        assert_eq!(comment.user_name, "Priya Krishnan");

        let photos = hub.list(FileTab::Photos).await;
        assert_eq!(photos[0].comments.len(), 1);
        assert_eq!(photos[0].comments[0].content, "Nice photo!");
    }

    #[tokio::test]
    async fn test_add_comment_errors() {
        let catalog = Catalog::seeded();
        let hub = CommunityHub::new(seed_shared_files());

        let blank = hub.add_comment("1", catalog.current_user(), "   \n").await;
        assert!(matches!(blank, Err(CommunityError::EmptyComment)));

        let missing = hub.add_comment("404", catalog.current_user(), "Hello").await;
        assert!(matches!(missing, Err(CommunityError::FileNotFound(_))));
    }
}
