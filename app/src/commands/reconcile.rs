//! `bridgefee reconcile`

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use serde_json::Value;

use bridge_api::dto::ReconcileResponse;
use bridge_core::AppConfig;
use reconciler::{BridgeMode, FeeReconciler, Leg, Reconciliation};

/// Legs file, after dispatching on its JSON shape
#[derive(Debug)]
enum LegInput {
    /// `[leg, ...]` or `{"legs": [leg, ...]}`
    Batch(Vec<Leg>),
    /// `{"leg": leg, "mode": ...}`
    Mode(Leg, BridgeMode),
}

impl LegInput {
    fn parse(text: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(text).context("Legs input is not valid JSON")?;

        match value {
            Value::Array(legs) => Ok(Self::Batch(parse_legs(legs)?)),
            Value::Object(mut object) => {
                if let Some(leg) = object.remove("leg") {
                    let leg = serde_json::from_value(leg).context("Malformed template leg")?;
                    let mode = serde_json::from_value(Value::Object(object))
                        .context("Malformed mode, expected \"mode\": \"single\" or \"multi\"")?;
                    return Ok(Self::Mode(leg, mode));
                }
                match object.remove("legs") {
                    Some(Value::Array(legs)) => Ok(Self::Batch(parse_legs(legs)?)),
                    Some(_) => bail!("\"legs\" must be an array of legs"),
                    None => bail!("Legs object must have a \"legs\" array or a \"leg\" with a \"mode\""),
                }
            }
            _ => bail!(
                "Legs JSON must be an array of legs, {{\"legs\": [...]}}, or {{\"leg\": {{...}}, \"mode\": ...}}"
            ),
        }
    }
}

fn parse_legs(values: Vec<Value>) -> anyhow::Result<Vec<Leg>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).with_context(|| format!("Malformed leg {}", index))
        })
        .collect()
}

/// Reconcile the legs in `input` and print the response JSON to stdout
pub fn run(config: &AppConfig, input: &Path, fee_denominator: Option<i64>) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let denominator = fee_denominator.unwrap_or(config.fees.fee_denominator);

    let response = reconcile_text(&text, denominator)?;
    tracing::info!(
        legs = response.legs.len(),
        native_value = %response.native_value,
        total_fee = %response.total_fee,
        "Reconciled {}",
        input.display()
    );

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read legs from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

/// Parse a legs document and reconcile it
pub fn reconcile_text(text: &str, fee_denominator: i64) -> anyhow::Result<ReconcileResponse> {
    let parsed = LegInput::parse(text)?;

    let reconciler = FeeReconciler::new(fee_denominator)?;
    let reconciliation: Reconciliation = match parsed {
        LegInput::Batch(legs) => reconciler.reconcile_detailed(&legs)?,
        LegInput::Mode(leg, mode) => reconciler.reconcile_mode(&leg, mode)?,
    };

    Ok(reconciliation.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::ReconcileError;

    #[test]
    fn test_plain_array() {
        let text = r#"[
            {"sendingAssetId": "0x0000000000000000000000000000000000000000", "totalAmount": 1000000, "feePercentage": 75}
        ]"#;
        let response = reconcile_text(text, 100_000).unwrap();
        assert_eq!(response.native_value, 1_000_000);
        assert_eq!(response.total_fee, 750);
        assert_eq!(response.legs[0].sending_amount, 999_250);
    }

    #[test]
    fn test_wrapped_request() {
        let text = r#"{"legs": [
            {"sendingAssetId": "0xUSDC", "totalAmount": "500000"},
            {"sendingAssetId": "0xUSDC", "totalAmount": "500000"}
        ]}"#;
        let response = reconcile_text(text, 100_000).unwrap();
        assert_eq!(response.approvals.len(), 1);
        assert_eq!(response.approvals[0].amount, 1_000_000);
    }

    #[test]
    fn test_mode_request() {
        let text = r#"{"leg": {"sendingAssetId": "0xUSDC", "totalAmount": 10, "bridgeFee": 1}, "mode": "multi", "legs": 4}"#;
        let response = reconcile_text(text, 100_000).unwrap();
        assert_eq!(response.approvals[0].amount, 40);
        assert_eq!(response.native_value, 4);
    }

    #[test]
    fn test_errors_surface() {
        let err = reconcile_text("[]", 100_000).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ReconcileError>(),
            Some(&ReconcileError::EmptyBatch)
        );

        let err = reconcile_text(r#"[{"sendingAssetId": "0xUSDC", "totalAmount": 1}]"#, 0)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReconcileError>(),
            Some(ReconcileError::InvalidDenominator { denominator: 0 })
        ));

        assert!(reconcile_text("not json", 100_000).is_err());
        assert!(reconcile_text(r#"{"legs": 3}"#, 100_000).is_err());
        assert!(reconcile_text("42", 100_000).is_err());
    }

    #[test]
    fn test_malformed_leg_names_its_index() {
        let text = r#"{"legs": [
            {"sendingAssetId": "0xUSDC", "totalAmount": 1},
            {"sendingAssetId": "0xUSDC", "totalAmount": 1},
            {"sendingAssetId": "0xUSDC", "totalAmount": 1},
            {"sendingAssetId": "0xUSDC", "totalAmount": "12abc"}
        ]}"#;
        let err = reconcile_text(text, 100_000).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Malformed leg 3: "), "{}", message);
        assert!(message.contains("12abc"), "{}", message);

        let err = reconcile_text(r#"[{"sendingAssetId": 7, "totalAmount": 1}]"#, 100_000)
            .unwrap_err();
        assert!(format!("{:#}", err).starts_with("Malformed leg 0: "));
    }

    #[test]
    fn test_malformed_mode_reported() {
        let text = r#"{"leg": {"sendingAssetId": "0xUSDC", "totalAmount": 1}, "mode": "triple"}"#;
        let err = reconcile_text(text, 100_000).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Malformed mode"));
    }

    #[test]
    fn test_oversized_mode_rejected() {
        let text = r#"{"leg": {"sendingAssetId": "0xUSDC", "totalAmount": 1}, "mode": "multi", "legs": 10000000000}"#;
        let err = reconcile_text(text, 100_000).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReconcileError>(),
            Some(ReconcileError::TooManyLegs { .. })
        ));
    }
}
