use std::time::Duration;

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
pub(crate) struct UnresolvedSessionConfiguration {
    cookie_name: String,

    secure: bool,

    max_age_seconds: Option<u64>,

    http_only: bool,

    domain: Option<String>,

    path: String,

    same_site: Option<String>,

    partitioned: bool,

    jwt: UnresolvedJwtConfiguration,
}

impl Default for UnresolvedSessionConfiguration {
    fn default() -> Self {
        Self {
            cookie_name: "SESSION".to_string(),
            secure: false,
            max_age_seconds: None,
            http_only: true,
            domain: None,
            path: "/".to_string(),
            same_site: Some("lax".to_string()),
            partitioned: false,
            jwt: UnresolvedJwtConfiguration::default(),
        }
    }
}


/// Settings for the session cookie.
#[derive(Clone, Debug)]
pub struct SessionConfiguration {
    pub cookie_name: String,

    pub secure: bool,

    /// If set, the session cookie expires this long after it was issued;
    /// otherwise it is a plain session cookie.
    pub max_age: Option<Duration>,

    pub http_only: bool,

    pub domain: Option<String>,

    /// Cookie path; always starts with `/`.
    pub path: String,

    pub same_site: Option<SameSite>,

    pub partitioned: bool,

    pub jwt: JwtConfiguration,
}

impl ResolvableConfigurationWithContext for UnresolvedSessionConfiguration {
    type Resolved = SessionConfiguration;
    type Context = JwtResolutionContext;

    fn resolve(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, ConfigurationResolutionError> {
        validate_configured_path("session.path", &self.path)?;

        let same_site = SameSite::parse_lenient("session.same_site", self.same_site);

        let jwt = self.jwt.resolve(context)?;

        Ok(SessionConfiguration {
            cookie_name: self.cookie_name,
            secure: self.secure,
            max_age: self.max_age_seconds.map(Duration::from_secs),
            http_only: self.http_only,
            domain: self.domain,
            path: self.path,
            same_site,
            partitioned: self.partitioned,
            jwt,
        })
    }
}
