use std::path::PathBuf;

/// Failure to load the image asset. Never leaves the responder.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read image asset {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid Lambda configuration, reported at cold start
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown ON_READ_FAILURE value '{0}' (expected 'ok' or 'error')")]
    UnknownFailurePolicy(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),
}
