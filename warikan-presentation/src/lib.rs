#![warn(clippy::uninlined_format_args)]

pub mod amount_format;
pub mod error_presenter;
pub mod json_presenter;
pub mod settlement_presenter;
pub mod text_table;

pub use error_presenter::format_processing_failure;
pub use json_presenter::{JsonPresenter, ReportDocument};
pub use settlement_presenter::{SettlementPresenter, SettlementView};
