//! HTTP API module for the expression helpers.
//!
//! This module exposes the helpers over REST: a script context and a list
//! of helper queries go in, one result per query comes out.
//!
//! The adapter is optional and sits outside the helper core. Scripts call
//! [`crate::expressions`] in process; nothing in the helpers depends on this
//! module.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EvaluationRequest, HelperQuery};
pub use response::{ApiError, ApiErrorResponse, EvaluationResponse, QueryResult};
pub use state::AppState;
