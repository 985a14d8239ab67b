use serde::Deserialize;

use crate::configuration::{
    errors::ConfigurationResolutionError,
    traits::ResolvableConfiguration,
};


#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub(crate) struct UnresolvedCookiesConfiguration {
    strict: bool,
}

impl Default for UnresolvedCookiesConfiguration {
    fn default() -> Self {
        Self { strict: true }
    }
}


/// Cookie header handling strictness.
#[derive(Clone, Debug)]
pub struct CookiesConfiguration {
    /// When `true`, malformed `Cookie`/`Set-Cookie` headers are rejected
    /// instead of best-effort parsed.
    pub strict: bool,
}

impl ResolvableConfiguration for UnresolvedCookiesConfiguration {
    type Resolved = CookiesConfiguration;

    fn resolve(self) -> Result<Self::Resolved, ConfigurationResolutionError> {
        Ok(CookiesConfiguration {
            strict: self.strict,
        })
    }
}
