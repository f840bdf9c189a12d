//! Sift server — HTTP API for text analysis and search.

pub mod analysis;
pub mod error;
pub mod eval;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
