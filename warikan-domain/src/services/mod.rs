pub mod balance_calculator;
pub mod settlement_matcher;
pub mod settlement_rounding;

pub use balance_calculator::{BalanceCalculator, BalanceSheet};
pub use settlement_matcher::SettlementMatcher;
pub use settlement_rounding::{
    DEFAULT_DEAD_ZONE_UNITS, MAX_SETTLEMENT_SCALE, RoundingMode, SettlementContext,
    quantize_balances,
};
