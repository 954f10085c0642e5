//! Single vs. multi-leg bridge modes
//!
//! Multi mode submits several copies of the same leg in one call, so every
//! total (approval, fee, bridge fee) scales with the copy count.

use serde::{Deserialize, Serialize};

use bridge_core::ReconcileError;

use crate::leg::Leg;

/// Most copies a multi-mode request may expand to
pub const MAX_MODE_LEGS: usize = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum BridgeMode {
    #[default]
    Single,
    Multi {
        legs: usize,
    },
}

impl BridgeMode {
    pub fn leg_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Multi { legs } => *legs,
        }
    }

    /// Copies of `template`, one per leg in this mode
    pub fn expand(&self, template: &Leg) -> Result<Vec<Leg>, ReconcileError> {
        let count = self.leg_count();
        if count > MAX_MODE_LEGS {
            return Err(ReconcileError::TooManyLegs {
                legs: count,
                max: MAX_MODE_LEGS,
            });
        }
        Ok(vec![template.clone(); count])
    }
}
