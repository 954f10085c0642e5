//! Bridge leg description and resolution
//!
//! A leg as supplied by a routing quote may omit any of `totalAmount`,
//! `sendingAmount` and `feeAmount`. Resolution fills them in from whatever
//! was given and rejects legs that cannot be made consistent.

use serde::{Deserialize, Serialize};

use bridge_core::{amount_serde, Amount, AssetId, LegField, ReconcileError};

use crate::calculator::{fee_for, gross_up_total};

/// One bridge (or swap-then-bridge) operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Source asset; a native sentinel for ETH/FTM/etc.
    /// When `requires_swap` is set this is the swap's input token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sending_asset_id: Option<AssetId>,
    /// Amount moved into the bridge step after the fee
    #[serde(
        default,
        with = "amount_serde::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sending_amount: Option<Amount>,
    /// Amount debited from the user before the fee
    #[serde(
        default,
        with = "amount_serde::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_amount: Option<Amount>,
    /// Explicit platform fee; takes precedence over `fee_percentage`
    #[serde(
        default,
        with = "amount_serde::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee_amount: Option<Amount>,
    /// Platform fee as a fraction of the fee denominator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_percentage: Option<i64>,
    /// Fixed native-currency cost of the underlying bridge protocol
    #[serde(default, with = "amount_serde")]
    pub bridge_fee: Amount,
    #[serde(default)]
    pub requires_swap: bool,
}

impl Leg {
    /// Leg moving `total_amount` of the native asset
    pub fn native(total_amount: Amount) -> Self {
        Self::token(AssetId::native(), total_amount)
    }

    /// Leg moving `total_amount` of an ERC-20 token
    pub fn token(asset_id: impl Into<AssetId>, total_amount: Amount) -> Self {
        Self {
            sending_asset_id: Some(asset_id.into()),
            total_amount: Some(total_amount),
            ..Default::default()
        }
    }

    pub fn with_fee_percentage(mut self, fee_percentage: i64) -> Self {
        self.fee_percentage = Some(fee_percentage);
        self
    }

    pub fn with_fee_amount(mut self, fee_amount: Amount) -> Self {
        self.fee_amount = Some(fee_amount);
        self
    }

    pub fn with_bridge_fee(mut self, bridge_fee: Amount) -> Self {
        self.bridge_fee = bridge_fee;
        self
    }

    pub fn with_swap(mut self) -> Self {
        self.requires_swap = true;
        self
    }

    /// Fill in derived amounts and validate the leg.
    ///
    /// `index` is only used to label errors.
    pub fn resolve(
        &self,
        index: usize,
        fee_denominator: i64,
    ) -> Result<ResolvedLeg, ReconcileError> {
        let invalid = |field, reason: String| ReconcileError::invalid_leg(index, field, reason);

        let asset_id = match &self.sending_asset_id {
            Some(id) if !id.is_blank() => id.clone(),
            _ => {
                return Err(invalid(
                    LegField::SendingAssetId,
                    "missing sending asset id".to_string(),
                ))
            }
        };

        if let Some(p) = self.fee_percentage {
            if !(0..=fee_denominator).contains(&p) {
                return Err(invalid(
                    LegField::FeePercentage,
                    format!("{} is outside [0, {}]", p, fee_denominator),
                ));
            }
        }

        for (field, value) in [
            (LegField::TotalAmount, self.total_amount),
            (LegField::SendingAmount, self.sending_amount),
            (LegField::FeeAmount, self.fee_amount),
            (LegField::BridgeFee, Some(self.bridge_fee)),
        ] {
            if let Some(v) = value.filter(|v| *v < 0) {
                return Err(invalid(field, format!("must be >= 0, got {}", v)));
            }
        }

        // Sending amount the total was grossed up from, if any
        let mut grossed_up_from = None;

        let total_amount = match (self.total_amount, self.sending_amount) {
            (Some(total), _) => total,
            (None, Some(sending)) => match (self.fee_amount, self.fee_percentage) {
                (Some(fee), _) => sending.checked_add(fee).ok_or_else(|| {
                    invalid(
                        LegField::TotalAmount,
                        "sendingAmount + feeAmount overflows".to_string(),
                    )
                })?,
                (None, Some(p)) => {
                    let total = gross_up_total(sending, p, fee_denominator).ok_or_else(|| {
                        invalid(
                            LegField::TotalAmount,
                            format!(
                                "cannot derive from sendingAmount {} at feePercentage {}",
                                sending, p
                            ),
                        )
                    })?;
                    grossed_up_from = Some(sending);
                    total
                }
                (None, None) => sending,
            },
            (None, None) => {
                return Err(invalid(
                    LegField::TotalAmount,
                    "neither totalAmount nor sendingAmount given".to_string(),
                ))
            }
        };

        let fee_amount = match (self.fee_amount, self.fee_percentage, grossed_up_from) {
            (Some(fee), _, _) => fee,
            (None, Some(_), Some(sending)) => total_amount - sending,
            (None, Some(p), None) => fee_for(total_amount, p, fee_denominator).ok_or_else(|| {
                invalid(
                    LegField::FeeAmount,
                    format!("totalAmount {} * feePercentage {} overflows", total_amount, p),
                )
            })?,
            (None, None, _) => 0,
        };

        if fee_amount > total_amount {
            return Err(invalid(
                LegField::FeeAmount,
                format!("{} exceeds totalAmount {}", fee_amount, total_amount),
            ));
        }

        let sending_amount = total_amount - fee_amount;
        if let Some(sending) = self.sending_amount.filter(|s| *s != sending_amount) {
            return Err(invalid(
                LegField::SendingAmount,
                format!(
                    "{} does not equal totalAmount {} - feeAmount {}",
                    sending, total_amount, fee_amount
                ),
            ));
        }

        Ok(ResolvedLeg {
            index,
            is_native: asset_id.is_native(),
            asset_id,
            total_amount,
            sending_amount,
            fee_amount,
            bridge_fee: self.bridge_fee,
            requires_swap: self.requires_swap,
        })
    }
}

/// A leg with every amount filled in and validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLeg {
    /// Position in the input batch
    pub index: usize,
    pub asset_id: AssetId,
    pub is_native: bool,
    pub total_amount: Amount,
    pub sending_amount: Amount,
    pub fee_amount: Amount,
    pub bridge_fee: Amount,
    pub requires_swap: bool,
}

impl ResolvedLeg {
    /// Native value this leg adds to the transaction
    pub fn native_contribution(&self) -> Option<Amount> {
        if self.is_native {
            self.bridge_fee.checked_add(self.total_amount)
        } else {
            Some(self.bridge_fee)
        }
    }
}
