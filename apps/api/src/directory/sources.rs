//! Data sources: pluggable, trait-based access to resumes and viewer profiles.
//!
//! `AppState` holds both as `Arc<dyn …>`; production wires `NotionDirectory`,
//! handler tests wire in-memory fakes.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::record::RawRecord;
use crate::models::user::UserProfile;
use crate::notion_client::{email_equals_filter, NotionClient};

#[async_trait]
pub trait ResumeSource: Send + Sync {
    /// Loads the whole resume collection. Each call replaces the previous snapshot.
    async fn fetch_resumes(&self) -> Result<Vec<RawRecord>, AppError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserProfile>, AppError>;
}

/// Resumes and users stored in two Notion databases.
pub struct NotionDirectory {
    client: NotionClient,
    resume_database_id: String,
    users_database_id: String,
}

impl NotionDirectory {
    pub fn new(client: NotionClient, resume_database_id: String, users_database_id: String) -> Self {
        Self {
            client,
            resume_database_id,
            users_database_id,
        }
    }
}

#[async_trait]
impl ResumeSource for NotionDirectory {
    async fn fetch_resumes(&self) -> Result<Vec<RawRecord>, AppError> {
        let records = self.client.query_database(&self.resume_database_id, None).await?;
        info!("Loaded {} chef resumes", records.len());
        Ok(records)
    }
}

#[async_trait]
impl UserDirectory for NotionDirectory {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserProfile>, AppError> {
        let filter = email_equals_filter(email);
        let records = self
            .client
            .query_database(&self.users_database_id, Some(&filter))
            .await
            .map_err(AppError::UserLookup)?;
        // Exact match still required on the filtered results.
        let found = find_by_email(&records, email);
        if found.is_none() {
            debug!("No user record for {email}");
        }
        Ok(found)
    }
}

/// Exact, case-sensitive match on the user's email property.
pub fn find_by_email(records: &[RawRecord], email: &str) -> Option<UserProfile> {
    records
        .iter()
        .map(UserProfile::from_record)
        .find(|profile| !profile.email.is_empty() && profile.email == email)
}
