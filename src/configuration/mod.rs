//! This module contains all configuration-relevant code, including
//! the full HTTP configuration structure as well as the methods needed
//! to load, validate and resolve it.
//!
//! Your starting point should probably be [`HttpConfiguration::load_from_path`].
//!
//! # Internals
//! The entire configuration structure is based on the concept of
//! unvalidated ("unresolved") and validated ("resolved") configuration
//! structures.
//!
//! For example, even though consumers interact with [`HttpConfiguration`],
//! loading internally deserializes the TOML document into the
//! `UnresolvedHttpConfiguration` structure. Its `resolve` method is then
//! called, which recursively turns it (and its sections) into validated
//! ("resolved") versions.
//!
//! All validation lives in those `resolve` implementations: path values
//! must start with `/`, the application secret is resolved (or derived in
//! development mode, or refused in production mode), and each JWT-bearing
//! section checks the secret against its signature algorithm's minimum
//! key length. Every failure is a [`ConfigurationResolutionError`] and is
//! meant to abort application startup.

#![allow(rustdoc::private_intra_doc_links)]

mod environment;
mod errors;
mod secret;
mod structure;
mod traits;
mod utilities;

pub use environment::{Environment, RuntimeMode};
pub use errors::ConfigurationResolutionError;
pub use secret::{SecretConfiguration, PRIMARY_CONFIGURATION_RESOURCE, SECRET_SENTINEL};
pub use structure::*;
