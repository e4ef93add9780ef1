//! HTTP handlers for the resource corpus and career catalog endpoints.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::career::{Career, Resource};
use crate::state::AppState;

const DEFAULT_CATEGORY_LIMIT: usize = 100;
const DEFAULT_SEARCH_LIMIT: usize = 50;

#[derive(Debug, Default, Deserialize)]
pub struct ResourceListParams {
    pub category: Option<String>,
    pub platform: Option<String>,
    pub difficulty: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FiltersApplied {
    pub category: Option<String>,
    pub platform: Option<String>,
    pub difficulty: Option<String>,
    pub limit: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceListResponse {
    /// Matching resources grouped by category, category names sorted.
    pub resources: BTreeMap<String, Vec<Resource>>,
    pub total: usize,
    pub filters_applied: FiltersApplied,
}

/// GET /api/resources
///
/// Grouped listing with optional category, platform, and difficulty filters.
/// The limit applies per category; empty categories drop out of the response.
pub async fn handle_list_resources(
    State(state): State<AppState>,
    Query(params): Query<ResourceListParams>,
) -> Json<ResourceListResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_CATEGORY_LIMIT);
    let mut grouped: BTreeMap<String, Vec<Resource>> = BTreeMap::new();
    let mut total = 0;

    for name in state.corpus.matching_categories(params.category.as_deref()) {
        let entries: Vec<Resource> = state
            .corpus
            .category_resources(name)
            .into_iter()
            .filter(|r| matches_text(&r.platform, params.platform.as_deref()))
            .filter(|r| matches_optional(r.difficulty.as_deref(), params.difficulty.as_deref()))
            .take(limit)
            .cloned()
            .collect();
        if !entries.is_empty() {
            total += entries.len();
            grouped.insert(name.to_string(), entries);
        }
    }

    Json(ResourceListResponse {
        resources: grouped,
        total,
        filters_applied: FiltersApplied {
            category: params.category,
            platform: params.platform,
            difficulty: params.difficulty,
            limit,
        },
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
    pub platforms: Vec<String>,
    pub difficulty_levels: Vec<String>,
}

/// GET /api/resources/categories
pub async fn handle_resource_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.corpus.category_names(),
        platforms: state.corpus.platforms(),
        difficulty_levels: state.corpus.difficulty_levels(),
    })
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Resource>,
    pub total_found: usize,
}

/// GET /api/resources/search
pub async fn handle_search_resources(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    if params.query.trim().is_empty() {
        return Err(AppError::Validation("query must not be empty".to_string()));
    }
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let results: Vec<Resource> = state
        .corpus
        .search(&params.query, params.category.as_deref(), limit)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(SearchResponse {
        total_found: results.len(),
        query: params.query,
        results,
    }))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CareerListResponse {
    pub careers: Vec<Career>,
    pub total: usize,
}

/// GET /api/careers
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<CareerListResponse> {
    let careers: Vec<Career> = state.corpus.careers().into_iter().cloned().collect();
    Json(CareerListResponse {
        total: careers.len(),
        careers,
    })
}

/// GET /api/careers/:name
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Career>, AppError> {
    state
        .corpus
        .get_career(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career '{name}' not found")))
}

fn matches_text(value: &str, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(f) => value.eq_ignore_ascii_case(f),
    }
}

fn matches_optional(value: Option<&str>, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(f) => value.map(|v| v.eq_ignore_ascii_case(f)).unwrap_or(false),
    }
}
