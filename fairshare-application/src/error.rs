use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store: {0}")]
    Read(std::io::Error),
    #[error("failed to write store: {0}")]
    Write(std::io::Error),
    #[error("store file is malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard command available")]
    CommandUnavailable,
    #[error("clipboard command failed: {0}")]
    CommandFailed(String),
    #[error("clipboard I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
