use std::sync::Arc;

use mo_core::config::AppConfig;
use tracing::info;

use super::runtime::AppRuntime;
use super::wiring::wire_dependencies;
use crate::adapters::{StdTerminal, TerminalUi};
use crate::screens::run_flow;

/// Run the onboarding flow on stdin/stdout until the user quits or input
/// ends.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let terminal = Arc::new(StdTerminal::stdio());
    let ui = Arc::new(TerminalUi::new(terminal.clone()));
    let runtime = AppRuntime::new(wire_dependencies(&config, ui), &config);

    info!("onboarding shell started");
    run_flow(&runtime, terminal.as_ref()).await?;
    info!("onboarding shell stopped");
    Ok(())
}
