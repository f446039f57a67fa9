//! Command-line arguments / 命令行参数

use std::path::PathBuf;

use clap::Parser;

use super::config::resolve_config_path;

/// Merchant onboarding in the terminal.
#[derive(Parser, Debug)]
#[command(name = "merchant-onboarding", version, about = "Merchant onboarding in the terminal", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file. Defaults to the user config directory.
    #[arg(env = "MO_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        resolve_config_path(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn positional_argument_is_the_config_path() {
        let cli = Cli::try_parse_from(["merchant-onboarding", "/etc/onboarding.toml"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/etc/onboarding.toml"));
    }

    #[test]
    fn help_is_not_mistaken_for_a_path() {
        let err = Cli::try_parse_from(["merchant-onboarding", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let err = Cli::try_parse_from(["merchant-onboarding", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
