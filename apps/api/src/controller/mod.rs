//! Interaction Controller — the page's state machine, independent of any UI toolkit.
//!
//! Idle → Loading → {Result, Error}; Result and Error go back to Loading on the
//! next submit. Idle is only ever the initial state.
//!
//! Only one submit can be in flight: `begin_submit` refuses while loading.
//! Each submit mints a token, and `finish_submit` drops any outcome whose token
//! is not the latest or that arrives after `detach`.

pub mod clipboard;

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use crate::optimizer::{
    OptimizationFailure, OptimizationFramework, OptimizationRequest, OptimizationResult,
    Optimizer, TaskCategory,
};

pub use clipboard::{Clipboard, MemoryClipboard};

/// How long the "copied" indicator stays on after a copy.
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken(u64);

/// A submit that has moved the view to Loading and still needs its outcome.
#[derive(Debug, Clone)]
pub struct PendingSubmit {
    pub token: SubmitToken,
    pub request: OptimizationRequest,
}

/// Exactly one of these is on screen at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Result(OptimizationResult),
    Error(String),
}

#[derive(Debug, Default)]
pub struct Controller {
    input: String,
    framework: OptimizationFramework,
    category: TaskCategory,
    view: ViewState,
    latest_token: u64,
    detached: bool,
    copied_until: Option<Instant>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn set_framework(&mut self, framework: OptimizationFramework) {
        self.framework = framework;
    }

    pub fn set_category(&mut self, category: TaskCategory) {
        self.category = category;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Shown under the text area.
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn framework(&self) -> OptimizationFramework {
        self.framework
    }

    pub fn category(&self) -> TaskCategory {
        self.category
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.view == ViewState::Loading
    }

    pub fn result(&self) -> Option<&OptimizationResult> {
        match &self.view {
            ViewState::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.view {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.detached && !self.is_loading() && !self.input.trim().is_empty()
    }

    /// Moves to Loading and hands back the request to run, or `None` (state
    /// untouched) when the input is blank or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if !self.can_submit() {
            return None;
        }
        let request =
            match OptimizationRequest::new(self.input.clone(), self.framework, self.category) {
                Ok(request) => request,
                Err(e) => {
                    debug!("Submit refused: {e}");
                    return None;
                }
            };

        self.latest_token += 1;
        self.view = ViewState::Loading;
        self.copied_until = None;

        Some(PendingSubmit {
            token: SubmitToken(self.latest_token),
            request,
        })
    }

    /// Applies an outcome if it belongs to the latest submit. Returns whether it was applied.
    pub fn finish_submit(
        &mut self,
        token: SubmitToken,
        outcome: Result<OptimizationResult, OptimizationFailure>,
    ) -> bool {
        if self.detached || token != SubmitToken(self.latest_token) || !self.is_loading() {
            debug!("Discarding stale optimization outcome (token {})", token.0);
            return false;
        }

        self.view = match outcome {
            Ok(result) => ViewState::Result(result),
            Err(failure) => ViewState::Error(failure.to_string()),
        };
        true
    }

    /// Runs one full submit against `optimizer`. Returns `false` without any
    /// outbound call when submitting is not allowed.
    pub async fn submit(&mut self, optimizer: &Optimizer) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let outcome = optimizer.optimize(&pending.request).await;
        self.finish_submit(pending.token, outcome)
    }

    /// Copies the optimized prompt and turns on the "copied" indicator.
    /// Does nothing without a result.
    pub fn copy_result(&mut self, clipboard: &dyn Clipboard) {
        let Some(result) = self.result() else {
            return;
        };
        match clipboard.write_text(&result.optimized_prompt) {
            Ok(()) => self.copied_until = Some(Instant::now() + COPY_FEEDBACK),
            Err(e) => warn!("Clipboard write failed: {e}"),
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until
            .is_some_and(|deadline| Instant::now() < deadline)
    }

    /// Tears the controller down; outcomes still in flight are ignored.
    pub fn detach(&mut self) {
        self.detached = true;
        self.latest_token += 1;
        self.copied_until = None;
    }
}
