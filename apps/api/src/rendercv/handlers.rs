//! Axum route handlers for the CV API.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::plan::SelectionPlan;
use crate::models::profile::Profile;
use crate::rendercv::advisories::{check_plan, PlanWarning};
use crate::rendercv::assembler::{assemble_document, DocumentOverrides, RenderCvDocument};
use crate::rendercv::defaults::{default_design, default_locale, default_settings};
use crate::rendercv::mapper::build_cv_dict;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BuildRequest {
    pub profile: Profile,
    #[serde(default)]
    pub plan: SelectionPlan,
}

#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub cv_dict: Map<String, Value>,
    pub warnings: Vec<PlanWarning>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentRequest {
    pub profile: Profile,
    #[serde(default)]
    pub plan: SelectionPlan,
    #[serde(flatten)]
    pub overrides: DocumentOverrides,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: RenderCvDocument,
    pub warnings: Vec<PlanWarning>,
}

#[derive(Debug, Deserialize)]
pub struct AssembleRequest {
    pub cv_dict: Map<String, Value>,
    #[serde(flatten)]
    pub overrides: DocumentOverrides,
}

#[derive(Debug, Serialize)]
pub struct DefaultsResponse {
    pub design: Map<String, Value>,
    pub locale: Map<String, Value>,
    pub settings: Map<String, Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/cv/build
///
/// Maps a profile through a selection plan into a RenderCV `{"cv": ...}` body.
pub async fn handle_build(
    Json(request): Json<BuildRequest>,
) -> Result<Json<BuildResponse>, AppError> {
    let (cv_dict, warnings) = build_checked(&request.profile, &request.plan)?;
    Ok(Json(BuildResponse { cv_dict, warnings }))
}

/// POST /api/v1/cv/document
///
/// Build + assemble in one call. Blocks not supplied fall back to defaults.
pub async fn handle_document(
    Json(request): Json<DocumentRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    let (cv_dict, warnings) = build_checked(&request.profile, &request.plan)?;
    let document = assemble_document(&cv_dict, request.overrides);

    info!(
        "Assembled document for {:?} ({} advisories)",
        request.profile.meta.name,
        warnings.len()
    );

    Ok(Json(DocumentResponse { document, warnings }))
}

/// POST /api/v1/cv/assemble
///
/// Wraps an already-built `{"cv": ...}` body with design/locale/settings.
pub async fn handle_assemble(Json(request): Json<AssembleRequest>) -> Json<RenderCvDocument> {
    Json(assemble_document(&request.cv_dict, request.overrides))
}

/// GET /api/v1/cv/defaults
pub async fn handle_defaults() -> Json<DefaultsResponse> {
    Json(DefaultsResponse {
        design: default_design(),
        locale: default_locale(),
        settings: default_settings(),
    })
}

/// Rejects profiles without a name, logs plan advisories, then maps.
fn build_checked(
    profile: &Profile,
    plan: &SelectionPlan,
) -> Result<(Map<String, Value>, Vec<PlanWarning>), AppError> {
    if profile.meta.name.trim().is_empty() {
        return Err(AppError::Validation(
            "profile.meta.name cannot be empty".to_string(),
        ));
    }

    let warnings = check_plan(profile, plan);
    for warning in &warnings {
        warn!("Plan advisory ({:?}): {}", warning.kind, warning.description);
    }

    let cv_dict = build_cv_dict(profile, plan)
        .to_map()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize cv dict: {e}")))?;

    Ok((cv_dict, warnings))
}
