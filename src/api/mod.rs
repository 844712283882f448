//! HTTP API for the fatigue and compliance engine.
//!
//! This module exposes the evaluator and the rule checker as JSON endpoints:
//! `POST /fatigue/evaluate` and `POST /compliance/check`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComplianceRequest, EvaluateRequest};
pub use response::{ApiError, ApiErrorResponse, EvaluateResponse};
pub use state::AppState;
