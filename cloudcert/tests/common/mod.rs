use cloudcert::app::App;
use cloudcert::config::{CloudCertConfig, SimulatorConfig};
use cloudcert::models::Role;
use cloudcert_core::config::Config as CoreConfig;

// Seed document ids used across tests
pub const PENDING_AWS_CERT: &str = "2";
pub const PENDING_ROBOTICS_CERT: &str = "6";
pub const APPROVED_FEE_RECEIPT: &str = "1";
pub const REJECTED_HACKATHON_CERT: &str = "4";

/// Config with zero simulated latency so upload flows resolve immediately.
pub fn test_config() -> CloudCertConfig {
    CloudCertConfig {
        common: CoreConfig {
            log_level: "debug".to_string(),
        },
        simulator: SimulatorConfig {
            certificate_delay_ms: 0,
            personal_delay_ms: 0,
            payment_delay_ms: 0,
        },
    }
}

pub fn spawn_app() -> App {
    App::new(test_config())
}

pub fn spawn_app_as(role: Role) -> App {
    let mut app = spawn_app();
    app.login(role);
    app
}
