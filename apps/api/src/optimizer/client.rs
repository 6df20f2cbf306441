//! Optimization Client — one structured-generation call per request.
//!
//! Flow: build user prompt → one `TextGenerator::generate` call →
//!       parse reply against the four-field schema → return result.
//!
//! Every failure below this boundary (transport, auth, empty reply, schema
//! violation) is logged with its detail and collapsed into one generic
//! `OptimizationFailure`. No retries, no caching.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::llm_client::{strip_json_fences, GenerationRequest, LlmError, TextGenerator};
use crate::optimizer::models::{OptimizationRequest, OptimizationResult};
use crate::optimizer::prompts::{response_schema, SYSTEM_INSTRUCTION, USER_PROMPT_TEMPLATE};

/// Balances creative rewriting against structural fidelity.
pub const TEMPERATURE: f32 = 0.7;
/// Reasoning allowance for applying the chosen framework.
pub const THINKING_BUDGET: u32 = 1024;

/// The one message users ever see when optimization fails.
pub const FAILURE_MESSAGE: &str = "优化提示词失败，请重试。";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("model returned an empty response")]
    Empty,

    #[error("response does not match schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Anything that went wrong below the optimizer boundary. Logged, never shown.
#[derive(Debug, Error)]
enum FailureCause {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Generic, user-facing optimization failure. Deliberately carries no detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", FAILURE_MESSAGE)]
pub struct OptimizationFailure;

/// Builds requests and parses replies. Cheap to clone; the generator is shared.
#[derive(Clone)]
pub struct Optimizer {
    generator: Arc<dyn TextGenerator>,
}

impl Optimizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResult, OptimizationFailure> {
        info!(
            "Optimizing prompt: framework={}, category={}, chars={}",
            request.framework.key(),
            request.category.key(),
            request.original_text.chars().count()
        );

        match self.try_optimize(request).await {
            Ok(result) => {
                info!("Optimization succeeded: framework_used={}", result.framework_used);
                Ok(result)
            }
            Err(cause) => {
                error!("Prompt optimization failed: {cause}");
                Err(OptimizationFailure)
            }
        }
    }

    async fn try_optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResult, FailureCause> {
        let generation = build_generation_request(request);
        let text = self.generator.generate(&generation).await?;
        Ok(parse_result(&text)?)
    }
}

/// Assembles the full generation call for one optimization request.
pub fn build_generation_request(request: &OptimizationRequest) -> GenerationRequest {
    GenerationRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        user_content: build_user_prompt(request),
        response_schema: response_schema(),
        temperature: TEMPERATURE,
        thinking_budget: THINKING_BUDGET,
    }
}

/// Fills the user template with the literal input and the selectors' display labels.
pub fn build_user_prompt(request: &OptimizationRequest) -> String {
    // Input text goes in last so braces inside it are never treated as placeholders.
    USER_PROMPT_TEMPLATE
        .replace("{category}", request.category.label())
        .replace("{framework}", request.framework.label())
        .replace("{original_text}", &request.original_text)
}

/// Decodes the model's reply. Fields are copied through untouched.
pub fn parse_result(text: &str) -> Result<OptimizationResult, ParseError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{GenerationRequest, LlmError, TextGenerator};

    /// Replays canned replies in order and records every request it sees.
    #[derive(Default)]
    pub struct ScriptedGenerator {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        pub calls: Mutex<Vec<GenerationRequest>>,
    }

    impl ScriptedGenerator {
        pub fn replying(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::default(),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }

    pub const COFFEE_REPLY: &str = r#"{
        "optimizedPrompt": "你是一名资深咖啡博主……",
        "explanation": "补充了角色、受众和格式要求。",
        "frameworkUsed": "PTCF",
        "improvementTips": ["指定字数", "说明目标读者", "给出参考文章"]
    }"#;
}
