mod clipboard;
mod paths;
mod store;

pub use clipboard::CommandClipboard;
pub use paths::AppPaths;
pub use store::FileSalaryStore;
