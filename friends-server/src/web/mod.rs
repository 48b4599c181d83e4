//! Web layer for the friends server.
//!
//! Provides the HTTP endpoints for creating friends and setting their
//! favorite journeys.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
