//! Command implementations

pub mod reconcile;
pub mod serve;
