use thiserror::Error;

/// The environment rejected a clipboard read or write.
#[derive(Debug, Error)]
pub enum ClipboardAccessError {
    #[error("clipboard read failed: {0}")]
    Read(String),

    #[error("clipboard write failed: {0}")]
    Write(String),

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("document io error: {0}")]
    Io(String),

    #[error("document is malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum BufferFileError {
    #[error("buffer file io error: {0}")]
    Io(String),

    #[error("buffer file not found")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("editing surface {0} is closed")]
    Closed(String),

    #[error("insert failed: {0}")]
    InsertFailed(String),
}
