#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Amount, Field, ParsedInput, SharedState, ShareResult, Totals, ValidationReport,
};
pub use services::{ShareCalculator, Validator};
