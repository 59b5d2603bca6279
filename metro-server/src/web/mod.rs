//! Web layer for the route planner.
//!
//! Provides JSON endpoints for inspecting the loaded network and planning
//! routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
