use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use rust_decimal::Decimal;

/// A monetary amount with exact decimal arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, amount| acc + amount)
    }
}

/// The validated input tuple a calculation runs on. Constructed fresh per
/// request by the validator; never retained as long-lived state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedState {
    pub salary_a: Amount,
    pub salary_b: Amount,
    pub expenses: Vec<Amount>,
}

/// Raw field values after number parsing but before validation. `None`
/// marks an empty or non-numeric field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedInput {
    pub salary_a: Option<Amount>,
    pub salary_b: Option<Amount>,
    pub expenses: Vec<Option<Amount>>,
}

/// One party's portion of a single expense.
///
/// Invariants: `share_a + share_b == expense` exactly, and the shares are
/// in the same ratio as the two salaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShareResult {
    pub expense: Amount,
    pub share_a: Amount,
    pub share_b: Amount,
}

/// Aggregates over all expenses. `total_expense` is always the sum of the
/// two share totals, never an independently accumulated input sum, so the
/// displayed total stays consistent with the per-expense split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Totals {
    pub total_share_a: Amount,
    pub total_share_b: Amount,
    pub total_expense: Amount,
    pub percent_a: Decimal,
    pub percent_b: Decimal,
}

/// An input field, for error reporting and styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    SalaryA,
    SalaryB,
    Expense(usize),
}

/// All validation failures of one calculation request, accumulated so every
/// offending field can be flagged at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub invalid_fields: Vec<Field>,
    pub missing_expenses: bool,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.invalid_fields.is_empty() && !self.missing_expenses
    }
}
