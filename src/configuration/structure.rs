use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

pub use self::action::ActionCompositionConfiguration;
use self::action::UnresolvedActionCompositionConfiguration;
pub use self::cookies::CookiesConfiguration;
use self::cookies::UnresolvedCookiesConfiguration;
pub use self::flash::FlashConfiguration;
use self::flash::UnresolvedFlashConfiguration;
pub use self::jwt::{JwtConfiguration, SignatureAlgorithm};
use self::jwt::JwtResolutionContext;
pub use self::mime::MimeTypesConfiguration;
use self::mime::DEFAULT_MIME_TYPES_BLOB;
pub use self::parser::ParserConfiguration;
use self::parser::UnresolvedParserConfiguration;
pub use self::same_site::SameSite;
pub use self::session::SessionConfiguration;
use self::session::UnresolvedSessionConfiguration;
use super::environment::Environment;
use super::errors::ConfigurationResolutionError;
use super::secret::{SecretConfiguration, UnresolvedSecretConfiguration};
use super::traits::{ResolvableConfiguration, ResolvableConfigurationWithContext};
use super::utilities::validate_configured_path;

mod action;
mod cookies;
mod flash;
mod jwt;
mod mime;
mod parser;
mod same_site;
mod session;



#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct UnresolvedHttpConfiguration {
    /// The context path the application is served under.
    context: String,

    /// The application secret section (`secret.key`, `secret.provider`).
    secret: UnresolvedSecretConfiguration,

    /// Deprecated flat secret key, superseded by `secret.key`.
    application_secret: Option<String>,

    /// Removed legacy key. Its mere presence fails resolution so stale
    /// configurations are caught instead of silently ignored.
    mimetype: Option<toml::Value>,

    /// Newline-delimited `extension=mime/type` blob.
    mime_types: String,

    /// Body-parser limits.
    parser: UnresolvedParserConfiguration,

    /// Action composition ordering flags.
    action_composition: UnresolvedActionCompositionConfiguration,

    /// Cookie header strictness.
    cookies: UnresolvedCookiesConfiguration,

    /// Session cookie settings.
    session: UnresolvedSessionConfiguration,

    /// Flash cookie settings.
    flash: UnresolvedFlashConfiguration,
}

impl Default for UnresolvedHttpConfiguration {
    fn default() -> Self {
        Self {
            context: "/".to_string(),
            secret: UnresolvedSecretConfiguration::default(),
            application_secret: None,
            mimetype: None,
            mime_types: DEFAULT_MIME_TYPES_BLOB.to_string(),
            parser: UnresolvedParserConfiguration::default(),
            action_composition: UnresolvedActionCompositionConfiguration::default(),
            cookies: UnresolvedCookiesConfiguration::default(),
            session: UnresolvedSessionConfiguration::default(),
            flash: UnresolvedFlashConfiguration::default(),
        }
    }
}


/// The entire resolved HTTP-layer configuration.
///
/// Produced once at application startup and treated as immutable,
/// shared read-only state afterwards.
#[derive(Clone, Debug)]
pub struct HttpConfiguration {
    /// This is the file path this configuration was loaded from,
    /// if it was loaded from a file at all.
    pub file_path: Option<PathBuf>,

    /// The context path the application is served under; starts with `/`.
    pub context: String,

    /// The resolved application secret.
    pub secret: SecretConfiguration,

    /// Body-parser limits.
    pub parser: ParserConfiguration,

    /// Action composition ordering flags.
    pub action_composition: ActionCompositionConfiguration,

    /// Cookie header strictness.
    pub cookies: CookiesConfiguration,

    /// Session cookie settings.
    pub session: SessionConfiguration,

    /// Flash cookie settings.
    pub flash: FlashConfiguration,

    /// Extension-to-MIME-type mapping.
    pub mime_types: MimeTypesConfiguration,
}


pub(crate) struct HttpResolutionContext {
    pub(crate) environment: Environment,
    pub(crate) file_path: Option<PathBuf>,
}

impl ResolvableConfigurationWithContext for UnresolvedHttpConfiguration {
    type Resolved = HttpConfiguration;
    type Context = HttpResolutionContext;

    fn resolve(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, ConfigurationResolutionError> {
        if self.mimetype.is_some() {
            return Err(ConfigurationResolutionError::ForbiddenKey {
                key: "mimetype".to_string(),
            });
        }

        validate_configured_path("context", &self.context)?;

        let raw_secret = match (self.secret.key, self.application_secret) {
            (Some(secret), Some(_)) => {
                warn!(
                    "Both secret.key and the deprecated application_secret are set; \
                     using secret.key."
                );
                Some(secret)
            }
            (Some(secret), None) => Some(secret),
            (None, Some(legacy_secret)) => {
                warn!("application_secret is deprecated; please rename it to secret.key.");
                Some(legacy_secret)
            }
            (None, None) => None,
        };

        let secret = SecretConfiguration::resolve_from_raw(
            raw_secret,
            self.secret.provider,
            &context.environment,
        )?;

        // The strength check runs once per JWT-bearing section, since
        // session and flash may configure different algorithms.
        let session = self.session.resolve(JwtResolutionContext {
            configuration_key_path: "session.jwt",
            secret_byte_length: secret.byte_length(),
        })?;

        let flash = self.flash.resolve(JwtResolutionContext {
            configuration_key_path: "flash.jwt",
            secret_byte_length: secret.byte_length(),
        })?;

        let parser = self.parser.resolve()?;
        let action_composition = self.action_composition.resolve()?;
        let cookies = self.cookies.resolve()?;

        let mime_types = MimeTypesConfiguration::from_blob(&self.mime_types);

        Ok(HttpConfiguration {
            file_path: context.file_path,
            context: self.context,
            secret,
            parser,
            action_composition,
            cookies,
            session,
            flash,
            mime_types,
        })
    }
}


impl HttpConfiguration {
    /// Load and resolve the configuration from a specific file path.
    pub fn load_from_path<P: AsRef<Path>>(
        configuration_file_path: P,
        environment: &Environment,
    ) -> Result<Self, ConfigurationResolutionError> {
        let configuration_file_path = configuration_file_path.as_ref();

        // Read the configuration file into memory.
        let configuration_string = fs::read_to_string(configuration_file_path).map_err(|source| {
            ConfigurationResolutionError::UnreadableConfigurationFile {
                path: configuration_file_path.to_path_buf(),
                source,
            }
        })?;

        // Parse the string into the `UnresolvedHttpConfiguration` structure
        // and then resolve it.
        let unresolved_configuration =
            toml::from_str::<UnresolvedHttpConfiguration>(&configuration_string).map_err(
                |source| ConfigurationResolutionError::UnparsableConfigurationFile { source },
            )?;

        let configuration_file_path = dunce::canonicalize(configuration_file_path)
            .unwrap_or_else(|_| configuration_file_path.to_path_buf());

        unresolved_configuration.resolve(HttpResolutionContext {
            environment: environment.clone(),
            file_path: Some(configuration_file_path),
        })
    }

    /// Resolve the configuration from an already-loaded TOML document.
    pub fn from_toml_str(
        configuration_string: &str,
        environment: &Environment,
    ) -> Result<Self, ConfigurationResolutionError> {
        let unresolved_configuration =
            toml::from_str::<UnresolvedHttpConfiguration>(configuration_string).map_err(
                |source| ConfigurationResolutionError::UnparsableConfigurationFile { source },
            )?;

        unresolved_configuration.resolve(HttpResolutionContext {
            environment: environment.clone(),
            file_path: None,
        })
    }

    /// Resolve a configuration consisting entirely of defaults.
    /// Fails in production mode, where an explicit secret is mandatory.
    pub fn resolve_defaults(
        environment: &Environment,
    ) -> Result<Self, ConfigurationResolutionError> {
        UnresolvedHttpConfiguration::default().resolve(HttpResolutionContext {
            environment: environment.clone(),
            file_path: None,
        })
    }
}
