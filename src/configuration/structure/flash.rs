use serde::Deserialize;

use super::jwt::{JwtConfiguration, JwtResolutionContext, UnresolvedJwtConfiguration};
use super::same_site::SameSite;
use crate::configuration::{
    errors::ConfigurationResolutionError,
    traits::ResolvableConfigurationWithContext,
    utilities::validate_configured_path,
};


#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub(crate) struct UnresolvedFlashConfiguration {
    cookie_name: String,

    secure: bool,

    http_only: bool,

    domain: Option<String>,

    path: String,

    same_site: Option<String>,

    partitioned: bool,

    jwt: UnresolvedJwtConfiguration,
}

impl Default for UnresolvedFlashConfiguration {
    fn default() -> Self {
        Self {
            cookie_name: "FLASH".to_string(),
            secure: false,
            http_only: true,
            domain: None,
            path: "/".to_string(),
            same_site: Some("lax".to_string()),
            partitioned: false,
            jwt: UnresolvedJwtConfiguration::default(),
        }
    }
}


/// Settings for the flash cookie. Flash state only lives for one request,
/// so unlike the session there is no max-age to configure.
#[derive(Clone, Debug)]
pub struct FlashConfiguration {
    pub cookie_name: String,

    pub secure: bool,

    pub http_only: bool,

    pub domain: Option<String>,

    /// Cookie path; always starts with `/`.
    pub path: String,

    pub same_site: Option<SameSite>,

    pub partitioned: bool,

    pub jwt: JwtConfiguration,
}

impl ResolvableConfigurationWithContext for UnresolvedFlashConfiguration {
    type Resolved = FlashConfiguration;
    type Context = JwtResolutionContext;

    fn resolve(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, ConfigurationResolutionError> {
        validate_configured_path("flash.path", &self.path)?;

        let same_site = SameSite::parse_lenient("flash.same_site", self.same_site);

        let jwt = self.jwt.resolve(context)?;

        Ok(FlashConfiguration {
            cookie_name: self.cookie_name,
            secure: self.secure,
            http_only: self.http_only,
            domain: self.domain,
            path: self.path,
            same_site,
            partitioned: self.partitioned,
            jwt,
        })
    }
}
