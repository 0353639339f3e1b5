use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::directory::accessor::{ChefProfile, SkillBadges};
use crate::directory::filter::{filter_profiles, unique_professions, ExperienceBracket, ProfessionFilter};
use crate::directory::masking::{mask_email, mask_phone, Role};
use crate::directory::pagination::{page_items, paginate, BrowseState, PageItem, PAGE_SIZE};
use crate::errors::AppError;
use crate::models::user::UserProfile;
use crate::state::AppState;

/// Header set by the identity provider's edge middleware for signed-in viewers.
pub const VIEWER_EMAIL_HEADER: &str = "x-user-email";

#[derive(Debug, Default, Deserialize)]
pub struct ChefSearchParams {
    pub q: Option<String>,
    pub experience: Option<String>,
    pub profession: Option<String>,
    pub page: Option<usize>,
}

impl ChefSearchParams {
    fn into_browse_state(self) -> Result<BrowseState, AppError> {
        let experience = self
            .experience
            .as_deref()
            .unwrap_or("all")
            .parse::<ExperienceBracket>()?;
        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::Validation("page must be 1 or greater".to_string()));
        }

        Ok(BrowseState::default()
            .with_query(self.q.unwrap_or_default())
            .with_experience(experience)
            .with_profession(ProfessionFilter::parse(self.profession.as_deref().unwrap_or("all")))
            .with_page(page))
    }
}

/// A card in the results grid. Contact fields are already masked for the viewer.
#[derive(Debug, Serialize)]
pub struct ChefCard {
    pub id: String,
    pub name: String,
    pub location: String,
    pub profession: String,
    pub experience: f64,
    pub education: String,
    pub skills: SkillBadges,
    pub email: String,
    pub phone: String,
    pub detail_available: bool,
}

impl ChefCard {
    fn for_viewer(chef: &ChefProfile, role: Role) -> Self {
        Self {
            id: chef.id.clone(),
            name: chef.name.clone(),
            location: chef.location.clone(),
            profession: chef.profession.clone(),
            experience: chef.experience,
            education: chef.education.clone(),
            skills: SkillBadges::from_skills(&chef.skills),
            email: mask_email(&chef.email, role),
            phone: mask_phone(&chef.phone, role),
            detail_available: role.is_pro(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChefListResponse {
    pub role: Role,
    pub chefs: Vec<ChefCard>,
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
    pub range_start: usize,
    pub range_end: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub pages: Vec<PageItem>,
    pub professions: Vec<String>,
    pub filters_active: bool,
    pub upgrade_required: bool,
}

/// Who is asking, and what they may see.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub email: Option<String>,
    pub role: Role,
    pub profile: Option<UserProfile>,
}

/// Resolves the viewer's role. Signed-in viewers missing from the users
/// database are treated as basic.
pub async fn resolve_viewer(state: &AppState, headers: &HeaderMap) -> Result<Viewer, AppError> {
    let email = headers
        .get(VIEWER_EMAIL_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    let Some(email) = email else {
        return Ok(Viewer {
            email: None,
            role: Role::Unauthenticated,
            profile: None,
        });
    };

    let profile = state.users.find_user_by_email(&email).await?;
    let role = profile.as_ref().map(|p| p.role).unwrap_or(Role::Basic);
    debug!("Viewer {email} resolved to {role:?}");

    Ok(Viewer {
        email: Some(email),
        role,
        profile,
    })
}

async fn load_profiles(state: &AppState) -> Result<Vec<ChefProfile>, AppError> {
    let records = state.resumes.fetch_resumes().await?;
    Ok(records.iter().map(ChefProfile::from_record).collect())
}

fn require_signed_in(viewer: &Viewer) -> Result<(), AppError> {
    if viewer.role == Role::Unauthenticated {
        return Err(AppError::Unauthorized(
            "Login required to search chefs".to_string(),
        ));
    }
    Ok(())
}

/// GET /api/v1/chefs
pub async fn handle_list_chefs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ChefSearchParams>,
) -> Result<Json<ChefListResponse>, AppError> {
    let browse = params.into_browse_state()?;
    let viewer = resolve_viewer(&state, &headers).await?;
    require_signed_in(&viewer)?;

    let profiles = load_profiles(&state).await?;
    let filtered = filter_profiles(&profiles, &browse.filters);
    let page = paginate(&filtered, browse.page, PAGE_SIZE);

    info!(
        "Chef search: {} of {} match, page {}/{}",
        page.total,
        profiles.len(),
        page.page,
        page.total_pages
    );

    Ok(Json(ChefListResponse {
        role: viewer.role,
        chefs: page
            .items
            .iter()
            .map(|chef| ChefCard::for_viewer(chef, viewer.role))
            .collect(),
        total: page.total,
        total_pages: page.total_pages,
        page: page.page,
        range_start: page.range_start,
        range_end: page.range_end,
        has_previous: page.has_previous,
        has_next: page.has_next,
        pages: page_items(page.page, page.total_pages),
        professions: unique_professions(&profiles),
        filters_active: browse.filters.is_active(),
        upgrade_required: !viewer.role.is_pro(),
    }))
}

/// GET /api/v1/chefs/professions
pub async fn handle_list_professions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<String>>, AppError> {
    let viewer = resolve_viewer(&state, &headers).await?;
    require_signed_in(&viewer)?;

    let profiles = load_profiles(&state).await?;
    Ok(Json(unique_professions(&profiles)))
}

/// GET /api/v1/chefs/:id
/// Full, unmasked resume for pro viewers.
pub async fn handle_get_chef(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ChefProfile>, AppError> {
    let viewer = resolve_viewer(&state, &headers).await?;
    require_signed_in(&viewer)?;
    if !viewer.role.is_pro() {
        return Err(AppError::Forbidden(
            "Upgrade to Pro for full details".to_string(),
        ));
    }

    load_profiles(&state)
        .await?
        .into_iter()
        .find(|chef| chef.id == id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Chef {id} not found")))
}

/// GET /api/v1/me
pub async fn handle_get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, AppError> {
    let viewer = resolve_viewer(&state, &headers).await?;
    if viewer.email.is_none() {
        return Err(AppError::Unauthorized("Login required".to_string()));
    }
    viewer
        .profile
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User not found in database".to_string()))
}
