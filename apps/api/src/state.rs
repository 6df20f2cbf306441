use crate::optimizer::Optimizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once in `main` around the Gemini client; tests build it around a double.
    pub optimizer: Optimizer,
}
