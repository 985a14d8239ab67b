//! `http-config-check`: loads an HTTP configuration file, resolves it
//! against a chosen runtime mode and prints a summary of the resolved
//! snapshot. Exits non-zero if resolution fails, with the same diagnostics
//! an embedding application would abort startup with.

use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use http_configuration::configuration::{
    Environment,
    HttpConfiguration,
    RuntimeMode,
    PRIMARY_CONFIGURATION_RESOURCE,
};
use http_configuration::logging::initialize_tracing;

use crate::cli::CLIArgs;

mod cli;


fn main() -> Result<()> {
    let arguments = CLIArgs::parse();

    let console_output_level_filter = match &arguments.console_logging_output_level_filter {
        Some(filter) => EnvFilter::try_new(filter)
            .into_diagnostic()
            .wrap_err("Invalid --console-logging-level filter.")?,
        None => EnvFilter::from_default_env(),
    };

    let _logging_guard = initialize_tracing(
        console_output_level_filter,
        arguments.log_file_output_directory.as_deref(),
    )?;


    let application_root_path = match arguments.application_root_path {
        Some(root_path) => root_path,
        None => std::env::current_dir()
            .into_diagnostic()
            .wrap_err("Could not get the current directory.")?,
    };

    let runtime_mode = RuntimeMode::from_str_or_default(&arguments.mode);
    let environment = Environment::new(application_root_path, runtime_mode);

    let configuration_file_path = arguments.configuration_file_path.unwrap_or_else(|| {
        environment.root_path.join(PRIMARY_CONFIGURATION_RESOURCE)
    });

    info!(
        path = %configuration_file_path.display(),
        mode = %environment.mode,
        "Resolving HTTP configuration."
    );

    let configuration = HttpConfiguration::load_from_path(&configuration_file_path, &environment)?;


    println!("Configuration resolved successfully.");
    println!("  context path:        {}", configuration.context);
    println!(
        "  secret:              {} bytes ({} bits){}",
        configuration.secret.byte_length(),
        configuration.secret.byte_length() * 8,
        match &configuration.secret.provider {
            Some(provider) => format!(", provider {provider}"),
            None => String::new(),
        }
    );
    println!(
        "  session cookie:      {} (algorithm {})",
        configuration.session.cookie_name, configuration.session.jwt.signature_algorithm
    );
    println!(
        "  flash cookie:        {} (algorithm {})",
        configuration.flash.cookie_name, configuration.flash.jwt.signature_algorithm
    );
    println!(
        "  parser limits:       {} bytes in memory, {} bytes on disk",
        configuration.parser.max_memory_buffer, configuration.parser.max_disk_buffer
    );
    println!(
        "  strict cookies:      {}",
        configuration.cookies.strict
    );
    println!(
        "  mime types:          {} registered extensions",
        configuration.mime_types.len()
    );

    Ok(())
}
