use std::path::PathBuf;


/// The runtime mode the application was started in.
///
/// Production mode enforces the strict secret rules
/// (see [`SecretConfiguration`][super::secret::SecretConfiguration]);
/// development and test modes fall back to a derived pseudo-secret.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RuntimeMode {
    #[default]
    Development,
    Test,
    Production,
}

impl RuntimeMode {
    /// Parse from string, falling back to [`RuntimeMode::Development`]
    /// for unrecognized values.
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" | "prod" => RuntimeMode::Production,
            "test" | "testing" => RuntimeMode::Test,
            "development" | "dev" => RuntimeMode::Development,
            _ => RuntimeMode::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, RuntimeMode::Production)
    }

    pub fn is_development(self) -> bool {
        matches!(self, RuntimeMode::Development)
    }

    pub fn is_test(self) -> bool {
        matches!(self, RuntimeMode::Test)
    }
}

impl std::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeMode::Development => write!(f, "development"),
            RuntimeMode::Test => write!(f, "test"),
            RuntimeMode::Production => write!(f, "production"),
        }
    }
}


/// Describes the environment the application runs in: its runtime mode
/// and the root directory its bundled resources are looked up under.
#[derive(Clone, Debug)]
pub struct Environment {
    pub mode: RuntimeMode,

    /// Application root directory; `resource` lookups are relative to this.
    pub root_path: PathBuf,
}

impl Environment {
    pub fn new<P: Into<PathBuf>>(root_path: P, mode: RuntimeMode) -> Self {
        Self {
            mode,
            root_path: root_path.into(),
        }
    }

    /// Look up a bundled resource by its name (a path relative to the
    /// application root). Returns the canonicalized absolute path if the
    /// resource exists, `None` otherwise.
    pub fn resource(&self, resource_name: &str) -> Option<PathBuf> {
        let candidate_path = self.root_path.join(resource_name);

        if !candidate_path.is_file() {
            return None;
        }

        // Fall back to the joined path if canonicalization fails
        // (e.g. the file disappeared between the check and the call).
        Some(dunce::canonicalize(&candidate_path).unwrap_or(candidate_path))
    }

    /// Like [`resource`][Self::resource], but returns the location as a
    /// string, which is what the secret derivation seeds on.
    pub(crate) fn resource_location(&self, resource_name: &str) -> Option<String> {
        self.resource(resource_name)
            .map(|path| path.to_string_lossy().to_string())
    }
}
