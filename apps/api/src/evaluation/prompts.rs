// All LLM prompt constants for the Evaluation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for prompt evaluation — enforces JSON-only output.
pub const EVALUATOR_SYSTEM: &str = "You are an expert in prompt engineering. \
    Your task is to evaluate the quality of a prompt that will be used with a \
    ChatGPT-style model. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Evaluation prompt template. Replace `{user_prompt}` before sending.
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate the following prompt.

1. Rate the prompt from 1 to 100 using this rubric:
   - Persona / role defined: 0-25
   - Task / objective clearly stated: 0-25
   - Enough context: 0-20
   - Constraints (format, length, language, tone, steps, etc.): 0-15
   - Clarity and precision of the wording: 0-15

2. Explain in a didactic way what is missing or weak in each dimension.

3. Propose concrete suggestions to improve the prompt.

Return a JSON object with this EXACT structure (no extra fields):
{
  "total_score": 42,
  "scores": {
    "persona": 5,
    "task": 15,
    "context": 8,
    "constraints": 6,
    "clarity": 8
  },
  "diagnosis": {
    "persona": "string",
    "task": "string",
    "context": "string",
    "constraints": "string",
    "clarity": "string"
  },
  "improvements": [
    "string",
    "string"
  ],
  "short_explanation": "string"
}

The language of the explanation should match the language of the original prompt.

PROMPT TO EVALUATE:
{user_prompt}"#;

/// System prompt for prompt optimization — enforces JSON-only output.
pub const OPTIMIZER_SYSTEM: &str = "You are an expert in prompt engineering. \
    Your task is to rewrite a prompt so it performs better with a \
    ChatGPT-style model, without changing its intent. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Optimization prompt template. Replace `{user_prompt}` before sending.
pub const OPTIMIZATION_PROMPT_TEMPLATE: &str = r#"Rewrite the following prompt into an optimized version that:
- Defines a clear role (persona) for the model.
- Has a specific objective (task).
- Includes the necessary context.
- Specifies format, language and other relevant constraints.
- Uses clear and precise wording.

Keep the original intent and language of the prompt.

Return a JSON object with this EXACT structure (no extra fields):
{
  "improved_prompt": "string",
  "short_explanation": "string"
}

PROMPT TO OPTIMIZE:
{user_prompt}"#;

/// Renders the evaluation user message for `user_prompt`.
pub fn evaluation_prompt(user_prompt: &str) -> String {
    EVALUATION_PROMPT_TEMPLATE.replace("{user_prompt}", user_prompt)
}

/// Renders the optimization user message for `user_prompt`.
pub fn optimization_prompt(user_prompt: &str) -> String {
    OPTIMIZATION_PROMPT_TEMPLATE.replace("{user_prompt}", user_prompt)
}
