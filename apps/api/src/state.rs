use std::sync::Arc;

use crate::directory::sources::{ResumeSource, UserDirectory};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Chef resume collection. Default: `NotionDirectory`.
    pub resumes: Arc<dyn ResumeSource>,
    /// Viewer profiles used to resolve the access role.
    pub users: Arc<dyn UserDirectory>,
}
