use cloudcert_core::error::AppError;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::config::SimulatorConfig;
use crate::models::Plan;

/// Outcome of a simulated plan purchase.
#[derive(Debug, Clone, Serialize)]
pub struct PlanUpgrade {
    pub plan: &'static str,
    pub storage_limit_gb: f64,
}

/// Simulated payment gateway for the upgrade flow. The "gateway" is a timer;
/// every purchase succeeds unless the session is torn down first.
#[derive(Debug, Clone)]
pub struct PaymentSimulator {
    config: SimulatorConfig,
    cancel: CancellationToken,
}

impl PaymentSimulator {
    pub fn new(config: SimulatorConfig, cancel: CancellationToken) -> Self {
        Self { config, cancel }
    }

    pub async fn process(&self, plan: &'static Plan) -> Result<PlanUpgrade, AppError> {
        let price = plan.monthly_price_usd.ok_or_else(|| {
            AppError::BadRequest(anyhow::anyhow!(
                "{} is the free tier; there is nothing to purchase",
                plan.name
            ))
        })?;

        tracing::info!(plan = plan.name, price_usd = price, "Processing payment");

        tokio::select! {
            _ = self.cancel.cancelled() => {
                tracing::info!(plan = plan.name, "Payment cancelled");
                return Err(AppError::Cancelled);
            }
            _ = tokio::time::sleep(self.config.payment_delay()) => {}
        }

        tracing::info!(
            plan = plan.name,
            storage_gb = plan.storage_gb,
            "Payment confirmed, account upgraded"
        );
        Ok(PlanUpgrade {
            plan: plan.name,
            storage_limit_gb: plan.storage_gb,
        })
    }
}
