/// Result alias that carries the custom [`VisualiserError`] type.
pub type Result<T> = std::result::Result<T, VisualiserError>;

/// Common error type for the core crate.
///
/// Step generation and playback never fail; these variants only surface at
/// the edges where text, files or identifiers enter the system.
#[derive(Debug, thiserror::Error)]
pub enum VisualiserError {
    /// Free-form message for failures that do not warrant their own variant.
    #[error("{0}")]
    Message(String),
    /// User supplied data that could not be turned into search input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Lookup of an algorithm id that is not registered.
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Malformed configuration or trace JSON.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl VisualiserError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }

    pub fn invalid<T: Into<String>>(msg: T) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<&str> for VisualiserError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

impl From<String> for VisualiserError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_variants_readably() {
        assert_eq!(VisualiserError::from("boom").to_string(), "boom");
        assert_eq!(
            VisualiserError::invalid("empty array").to_string(),
            "invalid input: empty array"
        );
        assert_eq!(
            VisualiserError::UnknownAlgorithm("bubble-sort".into()).to_string(),
            "unknown algorithm `bubble-sort`"
        );
    }
}
