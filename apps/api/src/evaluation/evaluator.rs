//! Evaluator — the three model-backed operations behind the API: score a
//! prompt against the rubric, rewrite it, and answer both versions.

use tracing::warn;

use crate::errors::AppError;
use crate::evaluation::models::{
    ComparisonPair, EvaluationOutcome, OptimizationOutcome, OptimizedPrompt, PromptEvaluation,
};
use crate::evaluation::prompts::{
    evaluation_prompt, optimization_prompt, EVALUATOR_SYSTEM, OPTIMIZER_SYSTEM,
};
use crate::llm_client::prompts::ANSWER_SYSTEM;
use crate::llm_client::{parse_json_reply, LlmError, OllamaClient};

/// Scores `user_prompt` against the five-dimension rubric.
///
/// A reply that cannot be parsed into a [`PromptEvaluation`] is a soft
/// failure: the raw text comes back in the outcome for display. Only a
/// failure to reach the inference server is a hard error.
pub async fn evaluate_prompt(
    llm: &OllamaClient,
    user_prompt: &str,
) -> Result<EvaluationOutcome, AppError> {
    let raw = match llm.call(&evaluation_prompt(user_prompt), EVALUATOR_SYSTEM).await {
        Ok(text) => text,
        Err(LlmError::EmptyContent) => {
            return Ok(EvaluationOutcome::Unparsed {
                raw_reply: String::new(),
                reason: "model returned an empty reply".to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    match parse_evaluation(&raw) {
        Ok(evaluation) => Ok(EvaluationOutcome::Parsed { evaluation }),
        Err(reason) => {
            warn!("Evaluation reply did not parse: {reason}");
            Ok(EvaluationOutcome::Unparsed {
                raw_reply: raw,
                reason,
            })
        }
    }
}

/// Rewrites `user_prompt` along the five rubric pillars.
///
/// A rewrite that is empty or textually identical to the input counts as
/// unparsed — the caller gets the raw reply instead of a useless "rewrite".
pub async fn optimize_prompt(
    llm: &OllamaClient,
    user_prompt: &str,
) -> Result<OptimizationOutcome, AppError> {
    let raw = match llm.call(&optimization_prompt(user_prompt), OPTIMIZER_SYSTEM).await {
        Ok(text) => text,
        Err(LlmError::EmptyContent) => {
            return Ok(OptimizationOutcome::Unparsed {
                raw_reply: String::new(),
                reason: "model returned an empty reply".to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    match parse_optimization(&raw, user_prompt) {
        Ok(optimized) => Ok(OptimizationOutcome::Parsed { optimized }),
        Err(reason) => {
            warn!("Optimization reply did not parse: {reason}");
            Ok(OptimizationOutcome::Unparsed {
                raw_reply: raw,
                reason,
            })
        }
    }
}

/// Answers both prompts with the plain answer system prompt, one call after
/// the other, and returns exactly two answer texts.
pub async fn compare_prompts(
    llm: &OllamaClient,
    original_prompt: &str,
    optimized_prompt: &str,
) -> Result<ComparisonPair, AppError> {
    let original_answer = llm.call(original_prompt, ANSWER_SYSTEM).await?;
    let optimized_answer = llm.call(optimized_prompt, ANSWER_SYSTEM).await?;
    Ok(ComparisonPair {
        original_answer,
        optimized_answer,
    })
}

/// Tolerant parse of an evaluator reply into a normalized evaluation.
fn parse_evaluation(raw: &str) -> Result<PromptEvaluation, String> {
    parse_json_reply::<PromptEvaluation>(raw)
        .map(PromptEvaluation::normalized)
        .map_err(|e| e.to_string())
}

/// Tolerant parse of an optimizer reply. Rejects degenerate rewrites.
fn parse_optimization(raw: &str, original: &str) -> Result<OptimizedPrompt, String> {
    let mut optimized = parse_json_reply::<OptimizedPrompt>(raw).map_err(|e| e.to_string())?;
    optimized.improved_prompt = optimized.improved_prompt.trim().to_string();

    if optimized.improved_prompt.is_empty() {
        return Err("improved prompt is empty".to_string());
    }
    if optimized.improved_prompt == original.trim() {
        return Err("improved prompt is identical to the original".to_string());
    }
    Ok(optimized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVALUATION_REPLY: &str = r#"{
        "total_score": 35,
        "scores": {"persona": 0, "task": 12, "context": 5, "constraints": 3, "clarity": 10},
        "diagnosis": {
            "persona": "No role is defined for the model.",
            "task": "The objective is stated but very broad.",
            "context": "No audience or depth is given.",
            "constraints": "No format, length or language constraints.",
            "clarity": "The wording itself is clear."
        },
        "improvements": [
            "Assign the model a role, e.g. a machine learning lecturer.",
            "Specify the target audience and desired length."
        ],
        "short_explanation": "A bare question with no persona, context or constraints."
    }"#;

    #[test]
    fn test_parse_evaluation_well_formed_reply() {
        let evaluation = parse_evaluation(EVALUATION_REPLY).unwrap();
        assert_eq!(evaluation.total_score, 30);
        assert_eq!(evaluation.scores.task, 12);
        assert_eq!(evaluation.improvements.len(), 2);
    }

    #[test]
    fn test_parse_evaluation_fenced_reply() {
        let fenced = format!("```json\n{EVALUATION_REPLY}\n```");
        let evaluation = parse_evaluation(&fenced).unwrap();
        assert_eq!(evaluation.scores.clarity, 10);
    }

    #[test]
    fn test_parse_evaluation_reply_with_prose_around_json() {
        let noisy = format!("Here is my assessment:\n{EVALUATION_REPLY}\nLet me know!");
        let evaluation = parse_evaluation(&noisy).unwrap();
        assert_eq!(evaluation.scores.context, 5);
    }

    #[test]
    fn test_parse_evaluation_total_stays_in_range_for_inflated_scores() {
        let reply = r#"{
            "total_score": 250,
            "scores": {"persona": 99, "task": 99, "context": 99, "constraints": 99, "clarity": 99},
            "diagnosis": {"persona": "", "task": "", "context": "", "constraints": "", "clarity": ""}
        }"#;
        let evaluation = parse_evaluation(reply).unwrap();
        assert_eq!(evaluation.total_score, 100);
    }

    #[test]
    fn test_parse_evaluation_rejects_free_text() {
        let err = parse_evaluation("This prompt is quite weak, maybe 30/100.").unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn test_parse_optimization_well_formed_reply() {
        let reply = r#"{
            "improved_prompt": "You are a machine learning lecturer. Explain what machine learning is to first-year students in under 300 words.",
            "short_explanation": "Added a persona, an audience and a length constraint."
        }"#;
        let optimized = parse_optimization(reply, "Explain what machine learning is.").unwrap();
        assert!(optimized.improved_prompt.starts_with("You are a machine learning lecturer."));
    }

    #[test]
    fn test_parse_optimization_rejects_empty_rewrite() {
        let reply = r#"{"improved_prompt": "   ", "short_explanation": ""}"#;
        let err = parse_optimization(reply, "Explain ML.").unwrap_err();
        assert!(err.contains("empty"));
    }

    #[test]
    fn test_parse_optimization_rejects_identical_rewrite() {
        let reply = r#"{"improved_prompt": "Explain ML.", "short_explanation": ""}"#;
        let err = parse_optimization(reply, "Explain ML.").unwrap_err();
        assert!(err.contains("identical"));
    }
}
