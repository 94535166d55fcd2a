use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// ErrUnknownFacingMode indicates a facing mode string that is neither
    /// `"user"` nor `"environment"`.
    #[error("unknown facing mode: {0}")]
    ErrUnknownFacingMode(String),

    /// ErrUnknownResizeMode indicates a resize mode string that is neither
    /// `"none"` nor `"crop-and-scale"`.
    #[error("unknown resize mode: {0}")]
    ErrUnknownResizeMode(String),

    /// ErrInvalidSize indicates a size string not of the form `{width}x{height}`.
    #[error("invalid size: {0}")]
    ErrInvalidSize(String),

    #[cfg(feature = "serde")]
    #[error("JsonError: {0}")]
    ErrJson(#[from] serde_json::Error),
}
