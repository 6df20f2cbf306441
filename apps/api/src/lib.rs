//! PromptMaster: turns an informal request into a structured prompt via Gemini.
//!
//! `optimizer` owns the request/response contract with the model and `routes`
//! exposes it over HTTP. `controller` is the page state machine a front-end
//! embeds to drive an `Optimizer` directly.

pub mod config;
pub mod controller;
pub mod errors;
pub mod llm_client;
pub mod optimizer;
pub mod routes;
pub mod state;
