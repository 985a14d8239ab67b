use serde::Deserialize;

use crate::configuration::{
    errors::ConfigurationResolutionError,
    traits::ResolvableConfiguration,
};


#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub(crate) struct UnresolvedParserConfiguration {
    max_memory_buffer: u64,

    max_disk_buffer: u64,

    allow_empty_files: bool,
}

impl Default for UnresolvedParserConfiguration {
    fn default() -> Self {
        Self {
            // 100 KiB in memory, 10 MiB on disk.
            max_memory_buffer: 102_400,
            max_disk_buffer: 10_485_760,
            allow_empty_files: false,
        }
    }
}


/// Body-parser limits.
#[derive(Clone, Debug)]
pub struct ParserConfiguration {
    /// Largest request body buffered entirely in memory, in bytes.
    pub max_memory_buffer: u64,

    /// Largest request body buffered to disk (multipart uploads), in bytes.
    pub max_disk_buffer: u64,

    /// Whether multipart file parts with an empty body are accepted.
    pub allow_empty_files: bool,
}

impl ResolvableConfiguration for UnresolvedParserConfiguration {
    type Resolved = ParserConfiguration;

    fn resolve(self) -> Result<Self::Resolved, ConfigurationResolutionError> {
        Ok(ParserConfiguration {
            max_memory_buffer: self.max_memory_buffer,
            max_disk_buffer: self.max_disk_buffer,
            allow_empty_files: self.allow_empty_files,
        })
    }
}
