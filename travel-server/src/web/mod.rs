//! Web layer for the travel route finder.
//!
//! Provides HTTP endpoints for route search and nearby airport lookup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
