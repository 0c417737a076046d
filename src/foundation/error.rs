/// Convenience alias used throughout the crate.
pub type RevealResult<T> = Result<T, RevealError>;

/// Errors raised at the edges of the engine: loading a page description, measuring path data and
/// writing style batches. Progress mapping and controller updates never fail.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// The page description is structurally invalid.
    #[error("validation error: {0}")]
    Validation(String),

    /// SVG path data could not be parsed or measured.
    #[error("path error: {0}")]
    Path(String),

    /// (De)serialization of a page description, script or batch failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A style sink failed to emit a batch.
    #[error("output error: {0}")]
    Output(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Path`].
    pub fn path(msg: impl Into<String>) -> Self {
        Self::Path(msg.into())
    }

    /// Build a [`RevealError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`RevealError::Output`].
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}

impl From<serde_json::Error> for RevealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

impl From<std::io::Error> for RevealError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
