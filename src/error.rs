//! Crate-level error type.

/// Errors surfaced while validating stack files.
///
/// YAML syntax failures are not represented here: they are recorded on the
/// per-file report so the remaining files still get checked. Everything in
/// this enum is handled by the driver loop, which prints a diagnostic and
/// moves on to the next file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target file does not exist.
    #[error("{0} not found")]
    MissingFile(String),

    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document parsed as YAML but does not have the shape of a stack
    /// file (non-mapping root, non-mapping service entry, and so on).
    #[error("invalid stack file structure: {0}")]
    Structure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
