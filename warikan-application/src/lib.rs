#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod roster;
pub mod settlement_processor;

pub use error::{RosterError, SnapshotParseError};
pub use model::{
    DEFAULT_CATEGORY, ExpenseField, ExpenseRecord, MemberRecord, NEW_EXPENSE_ITEM, PersonBalance,
    SettlementReport, TransferLine, TripSnapshot,
};
pub use ports::SnapshotParser;
pub use settlement_processor::{ProcessingOutcome, SettlementProcessor};
