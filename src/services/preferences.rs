use std::sync::Arc;
use tokio::sync::RwLock;
use crate::models::{Language, UserProfile};

/// Mutable preferences of the current user, layered over the read-only catalog profile
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    language: Arc<RwLock<Language>>,
}

impl Preferences {
    pub fn new(language: Language) -> Self {
        Self {
            language: Arc::new(RwLock::new(language)),
        }
    }

    /// Preferences starting from what the profile already declares
    pub fn for_user(user: &UserProfile) -> Self {
        Self::new(user.preferred_language)
    }

    pub async fn language(&self) -> Language {
        *self.language.read().await
    }

    pub async fn set_language(&self, language: Language) {
        *self.language.write().await = language;
        tracing::info!("Preferred language set to {:?}", language);
    }

    /// Copy of the profile with the current preferences applied
    pub async fn apply(&self, user: &UserProfile) -> UserProfile {
        let mut user = user.clone();
        user.preferred_language = self.language().await;
        user
    }
}
