//! Bridge-api: HTTP API layer for Bridgefee
//!
//! Exposes leg reconciliation as JSON endpoints for scripts and frontends.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::AppState;
