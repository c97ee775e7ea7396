use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// No live session exists, an identifier matched nothing, or a clear
    /// targeted a path that is not there.
    #[error("session not found: {0}")]
    NotFound(String),

    /// An entry address did not parse as `tab:entry`, or the addressed
    /// tab/entry does not exist.
    #[error("invalid index: {0}")]
    MalformedIndex(String),

    /// A required field is absent from an entry. Listing skips the entry;
    /// read/open report it as an invalid index.
    #[error("entry is missing required field `{0}`")]
    MissingField(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
