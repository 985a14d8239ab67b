//! HTTP-layer configuration for a web framework: session and flash cookie
//! settings, body-parser limits, cookie strictness, MIME type mapping,
//! JWT signing parameters, and the application signing secret, all loaded
//! from a TOML document and validated at startup.
//!
//! The interesting part is the secret handling: production mode refuses to
//! start with an unset or placeholder secret, development and test modes
//! derive a deterministic pseudo-secret from the configuration file's
//! location, and every JWT-bearing section checks the secret's byte length
//! against its signature algorithm's minimum key length.
//!
//! See [`configuration::HttpConfiguration::load_from_path`] for the entry
//! point.

pub mod configuration;
pub mod logging;

pub use configuration::{
    ConfigurationResolutionError,
    Environment,
    HttpConfiguration,
    RuntimeMode,
};
