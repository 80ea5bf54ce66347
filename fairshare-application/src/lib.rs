#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod processor;
pub mod state_codec;

pub use error::{ClipboardError, StoreError};
pub use model::{CalculationResult, RestoredInput, SharedQuery};
pub use ports::{ClipboardWriter, SalaryStore};
pub use processor::CalculationProcessor;
