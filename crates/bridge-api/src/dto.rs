//! Data Transfer Objects for API requests and responses

use serde::{Deserialize, Serialize};

use bridge_core::{amount_serde, Amount, AssetId};
use reconciler::{BridgeMode, Leg, Reconciliation, ResolvedLeg};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub fee_denominator: i64,
}

impl HealthResponse {
    pub fn new(fee_denominator: i64) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            fee_denominator,
        }
    }
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }
}

/// Fee configuration update request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfigRequest {
    pub fee_denominator: i64,
}

/// Reconcile request: an explicit batch of legs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    pub legs: Vec<Leg>,
}

/// Reconcile request: one template leg repeated per mode.
///
/// `{"leg": {...}, "mode": "multi", "legs": 2}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeReconcileRequest {
    pub leg: Leg,
    #[serde(flatten)]
    pub mode: BridgeMode,
}

/// Approval required for one source token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalDto {
    pub asset_id: AssetId,
    #[serde(with = "amount_serde")]
    pub amount: Amount,
}

/// Per-leg breakdown for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegBreakdownDto {
    pub index: usize,
    pub sending_asset_id: AssetId,
    pub is_native: bool,
    #[serde(with = "amount_serde")]
    pub total_amount: Amount,
    #[serde(with = "amount_serde")]
    pub sending_amount: Amount,
    #[serde(with = "amount_serde")]
    pub fee_amount: Amount,
    #[serde(with = "amount_serde")]
    pub bridge_fee: Amount,
    pub requires_swap: bool,
}

impl From<ResolvedLeg> for LegBreakdownDto {
    fn from(leg: ResolvedLeg) -> Self {
        Self {
            index: leg.index,
            sending_asset_id: leg.asset_id,
            is_native: leg.is_native,
            total_amount: leg.total_amount,
            sending_amount: leg.sending_amount,
            fee_amount: leg.fee_amount,
            bridge_fee: leg.bridge_fee,
            requires_swap: leg.requires_swap,
        }
    }
}

/// Reconcile response (amounts as decimal strings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileResponse {
    /// Native value to attach to the bridge call
    #[serde(with = "amount_serde")]
    pub native_value: Amount,
    /// Approvals to grant before the bridge call, ordered by asset id
    pub approvals: Vec<ApprovalDto>,
    #[serde(with = "amount_serde")]
    pub total_fee: Amount,
    pub legs: Vec<LegBreakdownDto>,
}

impl From<Reconciliation> for ReconcileResponse {
    fn from(reconciliation: Reconciliation) -> Self {
        let result = reconciliation.result;
        Self {
            native_value: result.native_value,
            approvals: result
                .approvals
                .into_iter()
                .map(|(asset_id, amount)| ApprovalDto { asset_id, amount })
                .collect(),
            total_fee: result.total_fee,
            legs: reconciliation.legs.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reconciler::FeeReconciler;

    #[test]
    fn test_mode_request_flattened() {
        let json = r#"{"leg": {"sendingAssetId": "0xUSDC", "totalAmount": 10}, "mode": "multi", "legs": 3}"#;
        let request: ModeReconcileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.mode, BridgeMode::Multi { legs: 3 });
        assert_eq!(request.leg.total_amount, Some(10));
    }

    #[test]
    fn test_response_shape() {
        let reconciliation = FeeReconciler::default()
            .reconcile_detailed(&[
                Leg::native(200_000).with_bridge_fee(50),
                Leg::token("0xDAI", 300_000).with_bridge_fee(75),
            ])
            .unwrap();
        let response = ReconcileResponse::from(reconciliation);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["nativeValue"], "200125");
        assert_eq!(value["totalFee"], "0");
        assert_eq!(value["approvals"][0]["assetId"], "0xDAI");
        assert_eq!(value["approvals"][0]["amount"], "300000");
        assert_eq!(value["legs"][0]["isNative"], true);
        assert_eq!(value["legs"][1]["bridgeFee"], "75");
    }
}
