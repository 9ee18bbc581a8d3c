//! Rounding of real-valued balances to whole settlement units.
//!
//! Balances come out of the even split as arbitrary decimals (`100 / 3`), while
//! transfers are paid in atomic currency units (1 yen by default). This module
//! owns the conversion and the dead-zone below which a balance counts as
//! settled.

use crate::model::{MemberBalances, MemberId, Money};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

/// Rounded balances with a magnitude below this many units are left alone.
pub const DEFAULT_DEAD_ZONE_UNITS: i64 = 2;

/// Largest supported number of decimal places for the atomic unit.
pub const MAX_SETTLEMENT_SCALE: u32 = 18;

/// Rounding mode for settlement quantization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round half toward positive infinity (2.5 -> 3, -2.5 -> -2).
    #[default]
    HalfUp,
    /// Round half to nearest even number (banker's rounding).
    HalfEven,
}

/// Context for settlement quantization.
///
/// # Example
/// ```
/// use warikan_domain::services::{RoundingMode, SettlementContext};
/// use warikan_domain::Money;
///
/// let ctx = SettlementContext::jpy_default();
/// assert_eq!(ctx.rounding_mode, RoundingMode::HalfUp);
/// assert_eq!(ctx.to_atomic_units(Money::new(-25, 1)), -2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementContext {
    /// Number of decimal places for the atomic unit (0 for JPY, 2 for USD).
    pub scale: u32,
    /// Rounding strategy to use.
    pub rounding_mode: RoundingMode,
    /// Smallest rounded magnitude, in atomic units, that is matched into a transfer.
    /// Anything below it is treated as already settled.
    pub dead_zone: i64,
}

impl SettlementContext {
    /// Default context for JPY (scale=0, HalfUp rounding, 2 yen dead-zone).
    pub fn jpy_default() -> Self {
        Self {
            scale: 0,
            rounding_mode: RoundingMode::HalfUp,
            dead_zone: DEFAULT_DEAD_ZONE_UNITS,
        }
    }

    pub fn effective_scale(self) -> u32 {
        self.scale.min(MAX_SETTLEMENT_SCALE)
    }

    /// Rounds `amount` to atomic units, saturating at `±i64::MAX`.
    pub fn to_atomic_units(self, amount: Money) -> i64 {
        let factor = Decimal::from(10_i64.pow(self.effective_scale()));
        let units = amount.as_decimal().saturating_mul(factor);
        let rounded = match self.rounding_mode {
            RoundingMode::HalfUp => units.saturating_add(Decimal::new(5, 1)).floor(),
            RoundingMode::HalfEven => {
                units.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            }
        };

        match rounded.to_i64() {
            Some(value) => value.max(-i64::MAX),
            None if rounded.is_sign_negative() => -i64::MAX,
            None => i64::MAX,
        }
    }

    pub fn from_atomic_units(self, units: i64) -> Money {
        Money::new(units, self.effective_scale())
    }

    /// Whether a rounded balance falls inside the dead-zone.
    pub fn is_settled(self, units: i64) -> bool {
        units.unsigned_abs() < self.dead_zone.max(1).unsigned_abs()
    }
}

impl Default for SettlementContext {
    fn default() -> Self {
        Self::jpy_default()
    }
}

/// Rounds every balance to atomic units, keeping member order.
pub fn quantize_balances<'a>(
    balances: &MemberBalances<'a>,
    context: SettlementContext,
) -> Vec<(MemberId<'a>, i64)> {
    balances
        .iter()
        .map(|(member, balance)| (*member, context.to_atomic_units(*balance)))
        .collect()
}
