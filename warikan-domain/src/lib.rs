#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Expense, ExpenseTotals, INDIVIDUAL_PAYER, Member, MemberBalances, MemberId, Money, Payer,
    Settlement, SplitType, Transfer,
};
pub use services::{
    BalanceCalculator, BalanceSheet, RoundingMode, SettlementContext, SettlementMatcher,
};
