//! Command-line arguments for the deadline engine server.

use std::path::PathBuf;

use clap::Parser;

/// Serve business-day and holiday queries over HTTP
#[derive(Parser, Debug)]
#[command(name = "deadline-engine")]
#[command(about = "Serve business-day and holiday queries over HTTP", long_about = None)]
pub struct CliArgs {
    /// Configuration directory containing engine.yaml
    #[arg(
        long = "config",
        value_name = "DIR",
        default_value = "./config/cl",
        help = "Configuration directory containing engine.yaml"
    )]
    pub config: PathBuf,

    /// Address to listen on, overriding the configuration
    #[arg(
        long = "bind",
        value_name = "ADDR",
        help = "Address to listen on (default: bind_address from engine.yaml)"
    )]
    pub bind: Option<String>,
}

/// Parses the process arguments.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["deadline-engine"]).unwrap();
        assert_eq!(args.config, PathBuf::from("./config/cl"));
        assert_eq!(args.bind, None);
    }

    #[test]
    fn test_config_and_bind_overrides() {
        let args = CliArgs::try_parse_from([
            "deadline-engine",
            "--config",
            "/etc/deadline-engine",
            "--bind",
            "127.0.0.1:9000",
        ])
        .unwrap();
        assert_eq!(args.config, PathBuf::from("/etc/deadline-engine"));
        assert_eq!(args.bind.as_deref(), Some("127.0.0.1:9000"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CliArgs::try_parse_from(["deadline-engine", "--strategy", "async"]).is_err());
    }
}
