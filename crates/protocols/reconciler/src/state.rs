//! Reconciliation output types

use std::collections::BTreeMap;

use bridge_core::{Amount, AssetId, LegField, ReconcileError};

use crate::leg::ResolvedLeg;

/// What a bridge call needs before it is sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationResult {
    /// Native currency to attach as the transaction value
    pub native_value: Amount,
    /// Minimum ERC-20 allowance per source token
    pub approvals: BTreeMap<AssetId, Amount>,
    /// Platform fee retained across all legs
    pub total_fee: Amount,
}

impl ReconciliationResult {
    /// Fold one resolved leg into the running totals.
    pub(crate) fn accumulate(&mut self, leg: &ResolvedLeg) -> Result<(), ReconcileError> {
        let overflow = |field, what: &str| {
            ReconcileError::invalid_leg(
                leg.index,
                field,
                format!("accumulated {} overflows", what),
            )
        };

        let field = if leg.is_native {
            LegField::TotalAmount
        } else {
            LegField::BridgeFee
        };
        self.native_value = leg
            .native_contribution()
            .and_then(|v| self.native_value.checked_add(v))
            .ok_or_else(|| overflow(field, "nativeValue"))?;

        if !leg.is_native {
            let approval = self.approvals.entry(leg.asset_id.clone()).or_insert(0);
            *approval = approval
                .checked_add(leg.total_amount)
                .ok_or_else(|| overflow(LegField::TotalAmount, "approval"))?;
        }

        self.total_fee = self
            .total_fee
            .checked_add(leg.fee_amount)
            .ok_or_else(|| overflow(LegField::FeeAmount, "totalFee"))?;

        Ok(())
    }
}

/// Reconciliation totals plus the per-leg breakdown they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub result: ReconciliationResult,
    /// Resolved legs in input order
    pub legs: Vec<ResolvedLeg>,
}
