use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use super::structure::SignatureAlgorithm;

/// All the ways resolving the HTTP configuration can fail.
///
/// Every variant is fatal: the caller is expected to abort application
/// startup instead of continuing with an invalid or insecure configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigurationResolutionError {
    #[error("Could not read the configuration file at {}.", .path.display())]
    #[diagnostic(code(http_configuration::unreadable_file))]
    UnreadableConfigurationFile {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse the configuration file as TOML.")]
    #[diagnostic(code(http_configuration::unparsable_file))]
    UnparsableConfigurationFile {
        #[source]
        source: toml::de::Error,
    },

    /// A configured path value (context path, session cookie path, ...)
    /// does not start with `/`.
    #[error("Value of configuration key {key} must start with \"/\", but is {value:?}.")]
    #[diagnostic(code(http_configuration::invalid_path))]
    InvalidPath { key: String, value: String },

    /// The application secret is unset (absent, blank, or the sentinel
    /// placeholder) while running in production mode.
    #[error(
        "The application secret (configuration key {key}) is not set in production mode. \
         Refusing to start with an unset or placeholder secret."
    )]
    #[diagnostic(code(http_configuration::missing_application_secret))]
    MissingApplicationSecret { key: String },

    /// The resolved application secret is too short for the configured
    /// JWT signature algorithm.
    #[error(
        "The application secret is too weak for {algorithm} (configuration key {key}): \
         the algorithm requires at least {required_bits} bits, but the secret provides {actual_bits}."
    )]
    #[diagnostic(code(http_configuration::weak_secret))]
    WeakSecret {
        key: String,
        algorithm: SignatureAlgorithm,
        required_bits: usize,
        actual_bits: usize,
    },

    /// A legacy configuration key that must not appear at all is present.
    #[error("Configuration key {key} is no longer supported and must be removed.")]
    #[diagnostic(code(http_configuration::forbidden_key))]
    ForbiddenKey { key: String },

    /// The configured JWT signature algorithm name is not recognized.
    #[error("Value of configuration key {key} is not a supported signature algorithm: {value:?}.")]
    #[diagnostic(code(http_configuration::invalid_algorithm))]
    InvalidAlgorithm { key: String, value: String },
}
