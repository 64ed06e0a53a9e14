use cloudcert_core::config as core_config;
use cloudcert_core::error::AppError;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct CloudCertConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub simulator: SimulatorConfig,
}

/// Artificial latency for the simulated operations. There is no real backend;
/// these delays stand in for network round trips.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    pub certificate_delay_ms: u64,
    pub personal_delay_ms: u64,
    pub payment_delay_ms: u64,
}

impl SimulatorConfig {
    pub fn certificate_delay(&self) -> Duration {
        Duration::from_millis(self.certificate_delay_ms)
    }

    pub fn personal_delay(&self) -> Duration {
        Duration::from_millis(self.personal_delay_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}

impl CloudCertConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        Ok(CloudCertConfig {
            common: common_config,
            simulator: SimulatorConfig {
                certificate_delay_ms: get_env_ms("SIMULATOR_CERTIFICATE_DELAY_MS", 2_000)?,
                personal_delay_ms: get_env_ms("SIMULATOR_PERSONAL_DELAY_MS", 1_500)?,
                payment_delay_ms: get_env_ms("SIMULATOR_PAYMENT_DELAY_MS", 2_000)?,
            },
        })
    }
}

fn get_env_ms(key: &str, default: u64) -> Result<u64, AppError> {
    match env::var(key) {
        Ok(val) => val.parse().map_err(|_| {
            AppError::ConfigError(anyhow::anyhow!(
                "{} must be an integer number of milliseconds, got {:?}",
                key,
                val
            ))
        }),
        Err(_) => Ok(default),
    }
}
