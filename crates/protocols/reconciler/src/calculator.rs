//! Reconciliation calculator
//!
//! Pure math functions over bridge legs. No async, no node.
//!
//! Fee formula (truncating, same as the bridge contracts' fixed-point math):
//!   fee = total * percentage / denominator
//!   sending = total - fee
//!
//! The batch fold:
//!   nativeValue = sum(bridgeFee) + sum(total of native legs)
//!   approvals[token] = sum(total of legs spending token)
//!   totalFee = sum(fee)

use bridge_core::{Amount, ReconcileError, DEFAULT_FEE_DENOMINATOR};

use crate::leg::Leg;
use crate::mode::BridgeMode;
use crate::state::{Reconciliation, ReconciliationResult};

/// Platform fee on `total` at `percentage / denominator`, rounded toward zero.
///
/// Returns `None` on overflow or a zero denominator.
pub fn fee_for(total: Amount, percentage: i64, denominator: i64) -> Option<Amount> {
    total
        .checked_mul(percentage as Amount)?
        .checked_div(denominator as Amount)
}

/// Total that must be debited so that `sending` remains after the fee.
///
/// total = sending * denominator / (denominator - percentage)
///
/// Returns `None` when the fee would consume everything (`percentage >= denominator`)
/// or on overflow.
pub fn gross_up_total(sending: Amount, percentage: i64, denominator: i64) -> Option<Amount> {
    if percentage >= denominator {
        return None;
    }
    let keep = denominator as Amount - percentage as Amount;
    sending.checked_mul(denominator as Amount)?.checked_div(keep)
}

/// Folds bridge legs into a [`ReconciliationResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeReconciler {
    fee_denominator: i64,
}

impl Default for FeeReconciler {
    fn default() -> Self {
        Self {
            fee_denominator: DEFAULT_FEE_DENOMINATOR,
        }
    }
}

impl FeeReconciler {
    /// Create a reconciler with a custom fee denominator (must be positive)
    pub fn new(fee_denominator: i64) -> Result<Self, ReconcileError> {
        if fee_denominator <= 0 {
            return Err(ReconcileError::InvalidDenominator {
                denominator: fee_denominator,
            });
        }
        Ok(Self { fee_denominator })
    }

    pub fn fee_denominator(&self) -> i64 {
        self.fee_denominator
    }

    /// Reconcile a batch of legs.
    ///
    /// Fails on an empty batch or on the first invalid leg.
    pub fn reconcile(&self, legs: &[Leg]) -> Result<ReconciliationResult, ReconcileError> {
        self.reconcile_detailed(legs).map(|r| r.result)
    }

    /// Reconcile a batch of legs, keeping the per-leg resolution.
    pub fn reconcile_detailed(&self, legs: &[Leg]) -> Result<Reconciliation, ReconcileError> {
        if legs.is_empty() {
            return Err(ReconcileError::EmptyBatch);
        }

        let resolved = legs
            .iter()
            .enumerate()
            .map(|(index, leg)| leg.resolve(index, self.fee_denominator))
            .collect::<Result<Vec<_>, _>>()?;

        let mut result = ReconciliationResult::default();
        for leg in &resolved {
            tracing::debug!(
                index = leg.index,
                asset = %leg.asset_id,
                total = %leg.total_amount,
                fee = %leg.fee_amount,
                bridge_fee = %leg.bridge_fee,
                native = leg.is_native,
                "Reconciling leg"
            );
            result.accumulate(leg)?;
        }

        tracing::debug!(
            legs = resolved.len(),
            native_value = %result.native_value,
            total_fee = %result.total_fee,
            approvals = result.approvals.len(),
            "Reconciled leg batch"
        );

        Ok(Reconciliation {
            result,
            legs: resolved,
        })
    }

    /// Expand a single template leg per `mode` and reconcile the batch.
    ///
    /// Fails with `TooManyLegs` before allocating when the mode asks for more
    /// than [`MAX_MODE_LEGS`](crate::mode::MAX_MODE_LEGS) copies.
    pub fn reconcile_mode(
        &self,
        template: &Leg,
        mode: BridgeMode,
    ) -> Result<Reconciliation, ReconcileError> {
        self.reconcile_detailed(&mode.expand(template)?)
    }
}

/// Reconcile with the default fee denominator (100_000).
pub fn reconcile(legs: &[Leg]) -> Result<ReconciliationResult, ReconcileError> {
    FeeReconciler::default().reconcile(legs)
}
