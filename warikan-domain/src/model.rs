use indexmap::IndexMap;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

/// Payer value meaning "each member pays for themselves".
pub const INDIVIDUAL_PAYER: &str = "各自";

/// Split tag that puts an expense into the shared pool.
pub const SPLIT_TAG: &str = "split";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId<'a>(pub &'a str);

impl<'a> MemberId<'a> {
    pub fn as_str(self) -> &'a str {
        self.0
    }
}

impl fmt::Display for MemberId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Member<'a> {
    pub id: MemberId<'a>,
    pub name: &'a str,
}

impl<'a> Member<'a> {
    pub fn new(id: &'a str, name: &'a str) -> Self {
        Self {
            id: MemberId(id),
            name,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitType {
    Split,
    #[default]
    Individual,
}

impl SplitType {
    /// Only the exact `split` tag is shared; anything else is individual.
    pub fn from_tag(tag: &str) -> Self {
        if tag == SPLIT_TAG {
            Self::Split
        } else {
            Self::Individual
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payer<'a> {
    Individually,
    Member(&'a str),
}

impl<'a> Payer<'a> {
    pub fn from_name(name: &'a str) -> Self {
        if name == INDIVIDUAL_PAYER {
            Self::Individually
        } else {
            Self::Member(name)
        }
    }

    pub fn member_name(self) -> Option<&'a str> {
        match self {
            Self::Individually => None,
            Self::Member(name) => Some(name),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expense<'a> {
    pub id: &'a str,
    pub item: &'a str,
    pub category: &'a str,
    pub budget: Money,
    pub actual: Money,
    pub payer: Payer<'a>,
    pub split_type: SplitType,
}

impl Expense<'_> {
    pub fn is_shared(&self) -> bool {
        self.split_type == SplitType::Split
    }
}

/// Planned and spent totals over every expense, shared or not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpenseTotals {
    pub budget: Money,
    pub actual: Money,
}

impl ExpenseTotals {
    pub fn from_expenses(expenses: &[Expense<'_>]) -> Self {
        expenses.iter().fold(Self::default(), |totals, expense| Self {
            budget: totals.budget + expense.budget,
            actual: totals.actual + expense.actual,
        })
    }

    pub fn is_over_budget(&self) -> bool {
        self.actual > self.budget
    }
}

/// Exact decimal amount. Arithmetic saturates at the decimal range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// `num * 10^-scale`. `scale` must not exceed 28.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// NaN, infinities and values outside the decimal range become zero.
    pub fn from_f64_or_zero(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Decimal::from_f64(value).map_or(Self::ZERO, Self)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Even share of `self` across `parts`; zero parts yield zero.
    pub fn split_evenly(self, parts: usize) -> Self {
        if parts == 0 {
            return Self::ZERO;
        }
        self.0
            .checked_div(Decimal::from(parts))
            .map_or(Self::ZERO, Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Balance per member, in member order.
pub type MemberBalances<'a> = IndexMap<MemberId<'a>, Money>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer<'a> {
    pub from: MemberId<'a>,
    pub to: MemberId<'a>,
    pub amount: Money,
}

#[derive(Debug, PartialEq)]
pub struct Settlement<'a> {
    pub new_balances: MemberBalances<'a>,
    pub transfers: Vec<Transfer<'a>>,
}
