//! # Dependency Wiring / 依赖注入
//!
//! Builds the concrete adapters from the configuration and groups them as
//! [`AppDeps`]. The UI port is passed in because it is owned by the shell.

use std::sync::Arc;
use std::time::Duration;

use mo_app::AppDeps;
use mo_core::config::AppConfig;
use mo_core::ports::UiPort;
use mo_infra::{FixedLocationProvider, StubAuthService, TokioCountdown};
use tracing::info;

pub fn wire_dependencies(config: &AppConfig, ui: Arc<dyn UiPort>) -> AppDeps {
    info!(
        simulated_latency_ms = config.auth.simulated_latency_ms,
        simulate_failure = config.auth.simulate_failure,
        permission = ?config.location.permission,
        "wiring onboarding dependencies"
    );

    AppDeps {
        auth: Arc::new(StubAuthService::new(&config.auth)),
        location: Arc::new(FixedLocationProvider::new(&config.location)),
        countdown: Arc::new(TokioCountdown::new(Duration::from_millis(
            config.otp.tick_millis,
        ))),
        ui,
    }
}
