//! Configuration for the event-log HTTP server.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// CLI arguments for the event-log server.
#[derive(Debug, Parser)]
#[command(name = "eventlog")]
#[command(about = "Event Log HTTP Server")]
pub struct CliArgs {
    /// HTTP server port.
    #[arg(long, default_value = "8765")]
    pub port: u16,

    /// Path of the durable log file.
    #[arg(long, default_value = "eventlog.csv")]
    pub log_file: String,
}

impl CliArgs {
    /// Convert CLI args to store configuration.
    pub fn to_log_config(&self) -> Config {
        Config {
            log_file: PathBuf::from(&self.log_file),
        }
    }
}

/// Configuration for the event-log HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8765 }
    }
}

impl From<&CliArgs> for ServerConfig {
    fn from(args: &CliArgs) -> Self {
        Self { port: args.port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_cli_args_to_log_config() {
        // given
        let args = CliArgs {
            port: 9090,
            log_file: "/tmp/readings.csv".to_string(),
        };

        // when
        let config = args.to_log_config();

        // then
        assert_eq!(config.log_file, PathBuf::from("/tmp/readings.csv"));
    }

    #[test]
    fn should_create_server_config_from_cli_args() {
        // given
        let args = CliArgs {
            port: 9090,
            log_file: "eventlog.csv".to_string(),
        };

        // when
        let server_config = ServerConfig::from(&args);

        // then
        assert_eq!(server_config.port, 9090);
    }
}
