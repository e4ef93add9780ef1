//! HTTP handlers for the roadmap endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::roadmap::{Roadmap, SkillDomains};
use crate::roadmap::progress::ProgressState;
use crate::roadmap::{assembler, domains};
use crate::state::AppState;

fn default_level() -> String {
    "beginner".to_string()
}

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    #[serde(default = "default_level")]
    pub user_level: String,
}

/// GET /api/roadmap/preview/:career
///
/// Always 200 with a structurally valid roadmap: unknown careers fall back
/// to synthesis, unknown levels to the default duration estimate.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(career): Path<String>,
    Query(params): Query<PreviewParams>,
) -> Json<Roadmap> {
    Json(assembler::assemble(
        &state.corpus,
        &state.curated,
        &career,
        &params.user_level,
    ))
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub career_name: String,
    #[serde(default = "default_level")]
    pub user_level: String,
    pub completed_topics: Option<Vec<String>>,
}

/// POST /api/roadmap/generate
///
/// Same roadmap as the preview; when `completed_topics` is supplied the
/// response is additionally decorated with completion percentages.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Json<Roadmap> {
    let mut roadmap = assembler::assemble(
        &state.corpus,
        &state.curated,
        &request.career_name,
        &request.user_level,
    );
    if let Some(completed) = &request.completed_topics {
        ProgressState::from_flat_list(&roadmap.phases, completed).apply(&mut roadmap);
    }
    Json(roadmap)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CareerSkillsResponse {
    pub career: String,
    pub category: String,
    pub description: String,
    pub skills: Vec<String>,
    pub skill_domains: SkillDomains,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_required: Option<String>,
}

/// GET /api/roadmap/careers/:career/skills
///
/// 404s for careers absent from the catalog; roadmaps degrade for unknown
/// careers but a skills breakdown has nothing to say without catalog data.
pub async fn handle_career_skills(
    State(state): State<AppState>,
    Path(career): Path<String>,
) -> Result<Json<CareerSkillsResponse>, AppError> {
    let known = state
        .corpus
        .get_career(&career)
        .ok_or_else(|| AppError::NotFound(format!("Career '{career}' not found")))?;

    Ok(Json(CareerSkillsResponse {
        career: known.name.clone(),
        category: known.category.clone(),
        description: known.description.clone(),
        skills: known.skills.clone(),
        skill_domains: domains::classify_skills(&known.skills),
        degree_required: known.degree_required.clone(),
    }))
}
