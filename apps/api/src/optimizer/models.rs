use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::optimizer::labels::{OptimizationFramework, TaskCategory};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("originalText cannot be empty")]
    EmptyText,
}

/// What the user asked for. Built fresh per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub original_text: String,
    #[serde(default)]
    pub framework: OptimizationFramework,
    #[serde(default)]
    pub category: TaskCategory,
}

impl OptimizationRequest {
    /// Rejects text that is empty after trimming.
    pub fn new(
        original_text: impl Into<String>,
        framework: OptimizationFramework,
        category: TaskCategory,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            original_text: original_text.into(),
            framework,
            category,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.original_text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(())
    }
}

/// The model's structured reply, passed through field-for-field.
///
/// All four fields are required; a reply missing any of them fails to decode.
/// `improvement_tips` is expected to hold three entries but the count is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub optimized_prompt: String,
    pub explanation: String,
    /// The framework the model actually applied. Differs from the request
    /// when AUTO was selected; never compared against it.
    pub framework_used: String,
    pub improvement_tips: Vec<String>,
}
