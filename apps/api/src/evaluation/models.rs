//! Transient data model for prompt evaluation. Nothing here is persisted —
//! every value lives for a single request/response cycle.

use serde::{Deserialize, Serialize};

/// Per-dimension maxima of the rubric. The five dimensions sum to 100.
pub const MAX_PERSONA: i64 = 25;
pub const MAX_TASK: i64 = 25;
pub const MAX_CONTEXT: i64 = 20;
pub const MAX_CONSTRAINTS: i64 = 15;
pub const MAX_CLARITY: i64 = 15;

/// Rubric scores, one per dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub persona: i64,
    pub task: i64,
    pub context: i64,
    pub constraints: i64,
    pub clarity: i64,
}

impl DimensionScores {
    pub fn sum(&self) -> i64 {
        self.persona + self.task + self.context + self.constraints + self.clarity
    }

    /// Clamps each dimension into its rubric range. Models occasionally score
    /// outside the stated maxima; tolerate rather than reject.
    pub fn clamped(&self) -> Self {
        Self {
            persona: self.persona.clamp(0, MAX_PERSONA),
            task: self.task.clamp(0, MAX_TASK),
            context: self.context.clamp(0, MAX_CONTEXT),
            constraints: self.constraints.clamp(0, MAX_CONSTRAINTS),
            clarity: self.clarity.clamp(0, MAX_CLARITY),
        }
    }
}

/// Didactic commentary, one short text per dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionDiagnosis {
    pub persona: String,
    pub task: String,
    pub context: String,
    pub constraints: String,
    pub clarity: String,
}

/// Full structured output of a prompt evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptEvaluation {
    pub total_score: i64,
    pub scores: DimensionScores,
    pub diagnosis: DimensionDiagnosis,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub short_explanation: String,
}

impl PromptEvaluation {
    /// Normalizes a raw model reply: dimensions are clamped into their rubric
    /// ranges and the total is recomputed from them, then clamped to [1, 100].
    /// When the model's own total disagrees with the sum, the sum wins.
    pub fn normalized(mut self) -> Self {
        self.scores = self.scores.clamped();
        self.total_score = self.scores.sum().clamp(1, 100);
        self
    }
}

/// Result of the optimize call: a rewrite of the prompt along the five
/// rubric pillars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizedPrompt {
    pub improved_prompt: String,
    #[serde(default)]
    pub short_explanation: String,
}

/// Two model answers held only for side-by-side display.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonPair {
    pub original_answer: String,
    pub optimized_answer: String,
}

/// Outcome of an evaluate call. A malformed or empty model reply is a soft
/// failure: the raw text is handed back for display instead of an error.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationOutcome {
    Parsed { evaluation: PromptEvaluation },
    Unparsed { raw_reply: String, reason: String },
}

/// Outcome of an optimize call, with the same soft-failure fallback.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OptimizationOutcome {
    Parsed { optimized: OptimizedPrompt },
    Unparsed { raw_reply: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagnosis() -> DimensionDiagnosis {
        DimensionDiagnosis {
            persona: "No role defined.".to_string(),
            task: "Task is broad.".to_string(),
            context: "No audience given.".to_string(),
            constraints: "No format specified.".to_string(),
            clarity: "Wording is clear.".to_string(),
        }
    }

    #[test]
    fn test_dimension_scores_sum() {
        let scores = DimensionScores {
            persona: 5,
            task: 15,
            context: 8,
            constraints: 6,
            clarity: 8,
        };
        assert_eq!(scores.sum(), 42);
    }

    #[test]
    fn test_clamped_caps_out_of_range_dimensions() {
        let scores = DimensionScores {
            persona: 40,
            task: -3,
            context: 20,
            constraints: 15,
            clarity: 99,
        };
        let clamped = scores.clamped();
        assert_eq!(clamped.persona, MAX_PERSONA);
        assert_eq!(clamped.task, 0);
        assert_eq!(clamped.context, MAX_CONTEXT);
        assert_eq!(clamped.clarity, MAX_CLARITY);
    }

    #[test]
    fn test_normalized_total_is_sum_of_dimensions() {
        let evaluation = PromptEvaluation {
            // Model claims 90 but the dimensions only add up to 42.
            total_score: 90,
            scores: DimensionScores {
                persona: 5,
                task: 15,
                context: 8,
                constraints: 6,
                clarity: 8,
            },
            diagnosis: diagnosis(),
            improvements: vec![],
            short_explanation: String::new(),
        };
        assert_eq!(evaluation.normalized().total_score, 42);
    }

    #[test]
    fn test_normalized_total_never_below_one() {
        let evaluation = PromptEvaluation {
            total_score: 0,
            scores: DimensionScores {
                persona: 0,
                task: 0,
                context: 0,
                constraints: 0,
                clarity: 0,
            },
            diagnosis: diagnosis(),
            improvements: vec![],
            short_explanation: String::new(),
        };
        let normalized = evaluation.normalized();
        assert!((1..=100).contains(&normalized.total_score));
        assert_eq!(normalized.total_score, 1);
    }

    #[test]
    fn test_prompt_evaluation_deserializes_without_optional_fields() {
        let json = r#"{
            "total_score": 42,
            "scores": {"persona": 5, "task": 15, "context": 8, "constraints": 6, "clarity": 8},
            "diagnosis": {
                "persona": "a", "task": "b", "context": "c",
                "constraints": "d", "clarity": "e"
            }
        }"#;
        let parsed: PromptEvaluation = serde_json::from_str(json).unwrap();
        assert!(parsed.improvements.is_empty());
        assert!(parsed.short_explanation.is_empty());
    }

    #[test]
    fn test_evaluation_outcome_serializes_with_status_tag() {
        let outcome = EvaluationOutcome::Unparsed {
            raw_reply: "not json".to_string(),
            reason: "expected value at line 1".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "unparsed");
        assert_eq!(json["raw_reply"], "not json");
    }
}
