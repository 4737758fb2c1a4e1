// Cross-cutting prompt constants. Each service that needs LLM calls defines
// its own prompts.rs alongside it; only prompts shared across modules live
// here.

/// System prompt for plain answers, used when comparing how the model
/// behaves on the original versus the optimized prompt.
pub const ANSWER_SYSTEM: &str =
    "Answer the following prompt in a clear, useful and concise way.";
