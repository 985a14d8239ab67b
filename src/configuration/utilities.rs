use super::errors::ConfigurationResolutionError;

/// Validates that a configured path value (the context path, a cookie path, ...)
/// starts with `/`.
///
/// `key` is the configuration key the value came from and is included in the
/// error message verbatim.
pub(crate) fn validate_configured_path(
    key: &str,
    value: &str,
) -> Result<(), ConfigurationResolutionError> {
    if value.starts_with('/') {
        return Ok(());
    }

    Err(ConfigurationResolutionError::InvalidPath {
        key: key.to_string(),
        value: value.to_string(),
    })
}
