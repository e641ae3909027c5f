use std::path::PathBuf;

use thiserror::Error;

use ascent_core::error::MetadataError;

/// Section generation failure. No partial section is ever returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerationError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error("section `{section}` produced no platforms")]
    EmptySection { section: String },
}

/// Failure loading a section catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("catalog {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: MetadataError,
    },
    #[error("catalog has no section named `{0}`")]
    UnknownSection(String),
}
