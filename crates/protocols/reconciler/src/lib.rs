//! Bridge Fee Reconciliation
//!
//! Folds a batch of bridge legs (each optionally preceded by a swap) into the
//! three numbers a bridge call needs before it is sent:
//!
//! - the native value to attach to the transaction
//! - the ERC-20 allowance to grant per source token
//! - the platform fee retained across all legs
//!
//! Everything here is pure arithmetic. No RPC, no signing.

pub mod calculator;
pub mod leg;
pub mod mode;
pub mod state;

pub use calculator::{fee_for, gross_up_total, reconcile, FeeReconciler};
pub use leg::{Leg, ResolvedLeg};
pub use mode::{BridgeMode, MAX_MODE_LEGS};
pub use state::{Reconciliation, ReconciliationResult};

pub use bridge_core::{LegField, ReconcileError};
