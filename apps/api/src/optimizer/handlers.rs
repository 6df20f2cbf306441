//! Axum route handlers for the Optimization API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::optimizer::labels::{LabelOption, OptimizationFramework, TaskCategory};
use crate::optimizer::models::{OptimizationRequest, OptimizationResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub frameworks: Vec<LabelOption>,
    pub categories: Vec<LabelOption>,
    pub defaults: SelectorDefaults,
}

#[derive(Debug, Serialize)]
pub struct SelectorDefaults {
    pub framework: OptimizationFramework,
    pub category: TaskCategory,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/options
///
/// Selector contents for the page: machine keys with their display labels.
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        frameworks: OptimizationFramework::options(),
        categories: TaskCategory::options(),
        defaults: SelectorDefaults {
            framework: OptimizationFramework::default(),
            category: TaskCategory::default(),
        },
    })
}

/// POST /api/v1/optimize
///
/// Rewrites the user's text into a structured prompt. Blank text is rejected
/// before any outbound call; every downstream failure returns the same generic message.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizationRequest>,
) -> Result<Json<OptimizationResult>, AppError> {
    request.validate()?;

    let result = state.optimizer.optimize(&request).await?;

    Ok(Json(result))
}
