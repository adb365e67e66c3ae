//! Axum route handlers for the Puzzle API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::puzzle::{generate_puzzle, ClueEntry, Grid};
use crate::state::AppState;

/// Matches the word count the original frontend always asked for.
const DEFAULT_NUM_WORDS: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GeneratePuzzleRequest {
    pub category: String,
    #[serde(default = "default_num_words")]
    pub num_words: usize,
}

fn default_num_words() -> usize {
    DEFAULT_NUM_WORDS
}

#[derive(Debug, Serialize)]
pub struct GeneratePuzzleResponse {
    pub grid: Grid,
    pub across_clues: Vec<ClueEntry>,
    pub down_clues: Vec<ClueEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/puzzles/generate
///
/// Full generation pipeline: clue fetch → placement → clue lists → numbering
/// → trim. Words the engine cannot fit are silently absent from the result.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GeneratePuzzleRequest>,
) -> Result<Json<GeneratePuzzleResponse>, AppError> {
    if request.category.trim().is_empty() {
        return Err(AppError::Validation("category cannot be empty".to_string()));
    }
    if request.num_words == 0 {
        return Err(AppError::Validation(
            "num_words must be positive".to_string(),
        ));
    }

    let puzzle = generate_puzzle(
        state.clue_source.as_ref(),
        &request.category,
        request.num_words,
    )
    .await?;

    Ok(Json(GeneratePuzzleResponse {
        grid: puzzle.grid,
        across_clues: puzzle.across_clues,
        down_clues: puzzle.down_clues,
    }))
}
