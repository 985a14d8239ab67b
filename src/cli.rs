//! Command-line interface definitions for the configuration checker binary.

use std::path::PathBuf;

use clap::Parser;


/// Command-line arguments.
#[derive(Parser)]
#[command(
    name = "http-config-check",
    author,
    about = "Loads, validates and summarizes an HTTP configuration file.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to check.
    /// If unspecified, this defaults to `{application root}/application.toml`.
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        help = "Path to the configuration file to check. \
                Defaults to application.toml inside the application root."
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[arg(
        short = 'm',
        long = "mode",
        default_value = "development",
        help = "Runtime mode to resolve against: development, test or production. \
                Unrecognized values fall back to development."
    )]
    pub mode: String,

    #[arg(
        short = 'r',
        long = "application-root-path",
        help = "Application root directory used for resource lookups. \
                Defaults to the current working directory."
    )]
    pub application_root_path: Option<PathBuf>,

    #[arg(
        long = "console-logging-level",
        help = "Console logging level filter (tracing EnvFilter syntax, e.g. \"info\" \
                or \"http_configuration=debug\"). Falls back to RUST_LOG if unset."
    )]
    pub console_logging_output_level_filter: Option<String>,

    #[arg(
        long = "log-file-output-directory",
        help = "If set, logs are additionally written to daily-rotated files \
                inside this directory."
    )]
    pub log_file_output_directory: Option<PathBuf>,
}
