use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::evaluation::evaluator::{compare_prompts, evaluate_prompt, optimize_prompt};
use crate::evaluation::models::{ComparisonPair, EvaluationOutcome, OptimizationOutcome};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub original_prompt: String,
    pub optimized_prompt: String,
}

/// The only input validation: a prompt must be non-empty after trimming.
fn require_non_empty(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("'{field}' must not be empty")));
    }
    Ok(())
}

/// POST /api/v1/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluationOutcome>, AppError> {
    require_non_empty(&req.prompt, "prompt")?;
    let outcome = evaluate_prompt(&state.llm, &req.prompt).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/optimize
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizationOutcome>, AppError> {
    require_non_empty(&req.prompt, "prompt")?;
    let outcome = optimize_prompt(&state.llm, &req.prompt).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/compare
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<ComparisonPair>, AppError> {
    require_non_empty(&req.original_prompt, "original_prompt")?;
    require_non_empty(&req.optimized_prompt, "optimized_prompt")?;
    let pair = compare_prompts(&state.llm, &req.original_prompt, &req.optimized_prompt).await?;
    Ok(Json(pair))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty_rejects_whitespace_only() {
        assert!(require_non_empty("   \n\t", "prompt").is_err());
    }

    #[test]
    fn test_require_non_empty_accepts_text() {
        assert!(require_non_empty("Explain what machine learning is.", "prompt").is_ok());
    }

    #[test]
    fn test_compare_request_deserializes() {
        let req: CompareRequest = serde_json::from_str(
            r#"{"original_prompt": "a", "optimized_prompt": "b"}"#,
        )
        .unwrap();
        assert_eq!(req.original_prompt, "a");
        assert_eq!(req.optimized_prompt, "b");
    }
}
