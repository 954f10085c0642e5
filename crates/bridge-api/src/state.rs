//! Application state shared across API handlers

use std::sync::Arc;

use bridge_core::{AppConfig, ReconcileError};
use reconciler::FeeReconciler;
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RwLock<AppConfig>,
}

impl AppState {
    /// Create a new application state with default config
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create with a specific config
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config: RwLock::new(config),
            }),
        }
    }

    /// Get current config
    pub async fn config(&self) -> AppConfig {
        self.inner.config.read().await.clone()
    }

    /// Replace the fee denominator used by subsequent requests
    pub async fn set_fee_denominator(&self, fee_denominator: i64) -> Result<(), ReconcileError> {
        FeeReconciler::new(fee_denominator)?;
        let mut config = self.inner.config.write().await;
        config.fees.fee_denominator = fee_denominator;
        tracing::info!(fee_denominator, "Updated fee denominator");
        Ok(())
    }

    /// Reconciler for the configured fee denominator
    pub async fn reconciler(&self) -> Result<FeeReconciler, ReconcileError> {
        let config = self.inner.config.read().await;
        FeeReconciler::new(config.fees.fee_denominator)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
