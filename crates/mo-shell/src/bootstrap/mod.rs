pub mod cli;
pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use cli::Cli;
pub use config::{load_config, load_config_or_default, resolve_config_path, ConfigSource};
pub use run::run_app;
pub use runtime::AppRuntime;
pub use wiring::wire_dependencies;
