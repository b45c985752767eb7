use thiserror::Error;

/// Failures raised while turning a request path into tile bounds.
///
/// All variants are deterministic validation failures: retrying the same
/// input gives the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TileError {
    #[error("malformed tile address: no 'tiles/<key>.<ext>' segment in {path:?}")]
    MalformedAddress { path: String },

    #[error("invalid quadkey {key:?}: {reason}")]
    InvalidQuadKey { key: String, reason: String },

    #[error("invalid projection parameters: {0}")]
    InvalidParams(String),
}

impl TileError {
    pub(crate) fn invalid_key(key: &str, reason: impl Into<String>) -> Self {
        TileError::InvalidQuadKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TileError>;
