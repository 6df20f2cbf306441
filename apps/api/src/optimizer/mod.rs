// Optimization Client: labels, prompt template, schema, one generation call.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod client;
pub mod handlers;
pub mod labels;
pub mod models;
pub mod prompts;

pub use client::{OptimizationFailure, Optimizer};
pub use labels::{OptimizationFramework, TaskCategory};
pub use models::{OptimizationRequest, OptimizationResult};
