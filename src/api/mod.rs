//! API layer module.
//!
//! HTML form pages, JSON handlers and routing for the ID generator form.

pub mod handlers;
pub mod router;
pub mod state;
pub mod view;

pub use router::create_router;
pub use state::AppState;
