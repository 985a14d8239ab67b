use md5::{Digest, Md5};
use serde::Deserialize;
use tracing::debug;

use super::{environment::Environment, errors::ConfigurationResolutionError};

/// The placeholder value distributed in configuration templates.
/// A secret equal to this is treated the same as an unset secret.
pub const SECRET_SENTINEL: &str = "changeme";

/// The resource whose location seeds the derived development secret.
pub const PRIMARY_CONFIGURATION_RESOURCE: &str = "application.toml";

/// Seed used when the primary configuration resource cannot be located.
const DERIVATION_FALLBACK_SEED: &str = "application.toml";

/// Mixed into the second digest so the derived secret is longer than a
/// single MD5 output.
const DERIVATION_SUFFIX: &str = "http-configuration";


#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub(crate) struct UnresolvedSecretConfiguration {
    pub(crate) key: Option<String>,
    pub(crate) provider: Option<String>,
}


/// The resolved application secret used to sign session and flash cookies.
#[derive(Clone)]
pub struct SecretConfiguration {
    pub secret: String,
    pub provider: Option<String>,
}

impl SecretConfiguration {
    /// Resolve the application secret from its raw configured value.
    ///
    /// Absent, blank, and [`SECRET_SENTINEL`] values all count as unset.
    /// An unset secret is fatal in production mode; in development and
    /// test modes a deterministic pseudo-secret is derived instead
    /// (see [`derive_development_secret`][Self::derive_development_secret]).
    pub(crate) fn resolve_from_raw(
        raw_secret: Option<String>,
        provider: Option<String>,
        environment: &Environment,
    ) -> Result<Self, ConfigurationResolutionError> {
        let configured_secret = raw_secret
            .filter(|value| !value.trim().is_empty())
            .filter(|value| value != SECRET_SENTINEL);

        let secret = match configured_secret {
            Some(secret) => secret,
            None => {
                if environment.mode.is_production() {
                    return Err(ConfigurationResolutionError::MissingApplicationSecret {
                        key: "secret.key".to_string(),
                    });
                }

                Self::derive_development_secret(environment)
            }
        };

        Ok(Self { secret, provider })
    }

    /// Derives the pseudo-secret used in development and test modes.
    ///
    /// The seed is the absolute location of the primary configuration
    /// resource when it exists, so two applications on the same machine
    /// get different secrets and do not see each other's cookies. The
    /// output is stable across restarts for the same location.
    ///
    /// This carries **no security guarantee whatsoever** (it is two MD5
    /// digests of a predictable string); production mode never reaches
    /// this path.
    pub fn derive_development_secret(environment: &Environment) -> String {
        let seed = environment
            .resource_location(PRIMARY_CONFIGURATION_RESOURCE)
            .unwrap_or_else(|| DERIVATION_FALLBACK_SEED.to_string());

        let first_half = hex::encode(Md5::digest(seed.as_bytes()));
        let second_half = hex::encode(Md5::digest(format!("{seed}{DERIVATION_SUFFIX}").as_bytes()));

        debug!(
            seed = %seed,
            "Derived a development application secret; configure secret.key to override."
        );

        // Two hex-encoded MD5 digests: 64 characters, 512 bits.
        format!("{first_half}{second_half}")
    }

    /// Byte length of the resolved secret, used for the per-algorithm
    /// strength check.
    pub fn byte_length(&self) -> usize {
        self.secret.len()
    }
}

// The secret must not leak through debug logs of the whole configuration.
impl std::fmt::Debug for SecretConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretConfiguration")
            .field("secret", &"<redacted>")
            .field("provider", &self.provider)
            .finish()
    }
}
