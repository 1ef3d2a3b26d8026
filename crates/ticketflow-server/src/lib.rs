//! Ticketflow Server
//!
//! HTTP API for AI ticket classification, response suggestion, and support
//! chat. Sits behind the platform's authentication layer; every endpoint is
//! a stateless request/response cycle with at most one outbound call to the
//! completion API, degrading to deterministic fallbacks when that API is
//! unavailable.

pub mod cli;
pub mod config;
pub mod routes;
pub mod state;

pub use cli::Cli;
pub use config::ServerConfig;
pub use routes::create_router;
pub use state::AppState;
