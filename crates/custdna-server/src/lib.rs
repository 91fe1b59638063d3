//! Customer DNA Server
//!
//! HTTP service and CLI on top of the classifier and the profile aggregator.
//! Customers live in a single JSON document; profiles are computed per request.

pub mod cli;
pub mod commands;
pub mod config;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::ServerConfig;
pub use routes::{build_app, create_router, AppError};
pub use server::{build_state, run_server};
pub use state::AppState;
pub use store::JsonFileStore;
