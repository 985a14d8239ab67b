use std::time::Duration;

use serde::Deserialize;

use crate::configuration::{
    errors::ConfigurationResolutionError,
    traits::ResolvableConfigurationWithContext,
};


/// JWT signature algorithms supported for session and flash cookies.
///
/// All of them are HMAC-based; the application secret doubles as the
/// signing key, which is why each algorithm carries a minimum key length
/// the secret is checked against.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SignatureAlgorithm {
    Hs256,
    Hs384,
    Hs512,
}

impl SignatureAlgorithm {
    /// The smallest key size (in bits) considered safe for this algorithm.
    pub fn minimum_key_length_bits(self) -> usize {
        match self {
            SignatureAlgorithm::Hs256 => 256,
            SignatureAlgorithm::Hs384 => 384,
            SignatureAlgorithm::Hs512 => 512,
        }
    }

    /// The equivalent [`jsonwebtoken`] algorithm, for downstream signing
    /// and verification code.
    pub fn to_jsonwebtoken(self) -> jsonwebtoken::Algorithm {
        match self {
            SignatureAlgorithm::Hs256 => jsonwebtoken::Algorithm::HS256,
            SignatureAlgorithm::Hs384 => jsonwebtoken::Algorithm::HS384,
            SignatureAlgorithm::Hs512 => jsonwebtoken::Algorithm::HS512,
        }
    }

    fn from_configured_name(
        key: &str,
        value: &str,
    ) -> Result<Self, ConfigurationResolutionError> {
        match value {
            "HS256" => Ok(SignatureAlgorithm::Hs256),
            "HS384" => Ok(SignatureAlgorithm::Hs384),
            "HS512" => Ok(SignatureAlgorithm::Hs512),
            _ => Err(ConfigurationResolutionError::InvalidAlgorithm {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureAlgorithm::Hs256 => write!(f, "HS256"),
            SignatureAlgorithm::Hs384 => write!(f, "HS384"),
            SignatureAlgorithm::Hs512 => write!(f, "HS512"),
        }
    }
}


#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub(crate) struct UnresolvedJwtConfiguration {
    signature_algorithm: String,

    expires_after_seconds: Option<u64>,

    clock_skew_seconds: u64,

    data_claim: String,
}

impl Default for UnresolvedJwtConfiguration {
    fn default() -> Self {
        Self {
            signature_algorithm: "HS256".to_string(),
            expires_after_seconds: None,
            clock_skew_seconds: 30,
            data_claim: "data".to_string(),
        }
    }
}


/// JWT parameters for one cookie section (session or flash).
#[derive(Clone, Debug)]
pub struct JwtConfiguration {
    pub signature_algorithm: SignatureAlgorithm,

    /// If set, issued tokens expire this long after creation.
    pub expires_after: Option<Duration>,

    /// Tolerated clock drift when validating expiry and not-before claims.
    pub clock_skew: Duration,

    /// Name of the claim the cookie payload is stored under.
    pub data_claim: String,
}


/// Context for resolving a [`UnresolvedJwtConfiguration`]: where in the
/// configuration tree the section lives (for error messages) and how long
/// the resolved application secret is.
#[derive(Clone, Copy, Debug)]
pub(crate) struct JwtResolutionContext {
    pub(crate) configuration_key_path: &'static str,
    pub(crate) secret_byte_length: usize,
}

impl ResolvableConfigurationWithContext for UnresolvedJwtConfiguration {
    type Resolved = JwtConfiguration;
    type Context = JwtResolutionContext;

    fn resolve(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, ConfigurationResolutionError> {
        let algorithm_key = format!("{}.signature_algorithm", context.configuration_key_path);

        let signature_algorithm =
            SignatureAlgorithm::from_configured_name(&algorithm_key, &self.signature_algorithm)?;

        let required_bits = signature_algorithm.minimum_key_length_bits();
        let actual_bits = context.secret_byte_length * 8;

        if actual_bits < required_bits {
            return Err(ConfigurationResolutionError::WeakSecret {
                key: algorithm_key,
                algorithm: signature_algorithm,
                required_bits,
                actual_bits,
            });
        }

        Ok(JwtConfiguration {
            signature_algorithm,
            expires_after: self.expires_after_seconds.map(Duration::from_secs),
            clock_skew: Duration::from_secs(self.clock_skew_seconds),
            data_claim: self.data_claim,
        })
    }
}
