use crate::error::{ClipboardError, StoreError};

/// Persistent key-value store for the two salary fields. Accessed
/// synchronously and sequentially; values are display-formatted strings.
pub trait SalaryStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Writes the share link to the system clipboard. Fire-and-forget from the
/// caller's point of view: failure is reported but never retried.
pub trait ClipboardWriter: Send + Sync {
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}
