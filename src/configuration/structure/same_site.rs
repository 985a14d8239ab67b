use tracing::warn;

/// The cookie `SameSite` attribute, controlling cross-site send behavior.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    /// Parse an optional configured value.
    ///
    /// Unrecognized non-empty values are logged and treated as "attribute
    /// absent" rather than failing resolution. Absent and empty values are
    /// absent without a warning.
    pub(crate) fn parse_lenient(key: &str, raw_value: Option<String>) -> Option<Self> {
        let raw_value = raw_value?;
        let trimmed_value = raw_value.trim();

        if trimmed_value.is_empty() {
            return None;
        }

        match trimmed_value.to_ascii_lowercase().as_str() {
            "strict" => Some(SameSite::Strict),
            "lax" => Some(SameSite::Lax),
            "none" => Some(SameSite::None),
            _ => {
                warn!(
                    key = %key,
                    value = %raw_value,
                    "Ignoring unrecognized SameSite value; the attribute will not be set."
                );

                None
            }
        }
    }

    /// The attribute value as it appears in a `Set-Cookie` header.
    pub fn attribute_value(self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}
