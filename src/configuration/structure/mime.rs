use std::collections::BTreeMap;

/// MIME types shipped by default; the configured blob is parsed on top of
/// this format and replaces it entirely when present.
pub(crate) const DEFAULT_MIME_TYPES_BLOB: &str = "\
css=text/css
gif=image/gif
html=text/html
ico=image/x-icon
jpeg=image/jpeg
jpg=image/jpeg
js=application/javascript
json=application/json
png=image/png
svg=image/svg+xml
txt=text/plain
webp=image/webp
woff2=font/woff2
xml=application/xml
";


/// Extension-to-MIME-type mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MimeTypesConfiguration {
    table: BTreeMap<String, String>,
}

impl MimeTypesConfiguration {
    /// Parses a newline-delimited `extension=mime/type` blob.
    ///
    /// Lines are trimmed first; blank lines and lines starting with `#`
    /// are skipped, and so are lines without a `=`. Each remaining line is
    /// split at its first `=`. On duplicate extensions the last
    /// occurrence wins.
    pub fn from_blob(blob: &str) -> Self {
        let mut table = BTreeMap::new();

        for line in blob.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((extension, mime_type)) = line.split_once('=') else {
                continue;
            };

            table.insert(extension.to_string(), mime_type.to_string());
        }

        Self { table }
    }

    /// Look up the MIME type registered for a file extension.
    pub fn mime_type(&self, extension: &str) -> Option<&str> {
        self.table.get(extension).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table
            .iter()
            .map(|(extension, mime_type)| (extension.as_str(), mime_type.as_str()))
    }
}
