#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod results_presenter;
pub mod text_table;

pub use results_presenter::{ResultsPresenter, ResultsView};
