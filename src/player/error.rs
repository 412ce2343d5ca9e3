use crate::remote::RemoteError;

pub type Result<T> = std::result::Result<T, PlayerError>;

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// Requested tag is not one of album, artist, title.
    #[error("not a valid tag: {0:?} (expected album, artist or title)")]
    InvalidTag(String),

    /// The player printed something we could not make sense of.
    #[error("unexpected player output: {0}")]
    Format(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("{0} is not supported by this player")]
    Unsupported(&'static str),
}

impl PlayerError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, PlayerError::Unsupported(_))
    }
}
