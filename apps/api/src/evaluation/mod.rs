//! Evaluation module — scores a prompt against the five-dimension rubric,
//! rewrites it along the same pillars, and compares model answers.

pub mod evaluator;
pub mod handlers;
pub mod models;
pub mod prompts;
