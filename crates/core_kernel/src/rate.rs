//! Money-per-time rates with precise decimal arithmetic
//!
//! This module provides a type-safe representation of recurring monetary
//! amounts (such as "$1,000.00/mo") using rust_decimal for precise
//! calculations without floating-point errors. Two rates with different
//! time units are normalized to a common unit before they are combined.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use thiserror::Error;

/// Absolute tolerance, in monthly-normalized amount, under which two rates
/// are considered equal. Division is the only rounding source in the
/// arithmetic here, and it keeps far more precision than this.
pub const RATE_TOLERANCE: Decimal = dec!(0.0001);

/// Time units a rate can repeat over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Returns the number of seconds in one repetition of this unit
    ///
    /// A year is a mean tropical year (365.24219 days, as measured in the
    /// year 2000) and a month is one-twelfth of that, so conversions stay
    /// consistent regardless of calendar irregularities.
    pub fn seconds(&self) -> Decimal {
        match self {
            TimeUnit::Second => dec!(1),
            TimeUnit::Minute => dec!(60),
            TimeUnit::Hour => dec!(3600),
            TimeUnit::Day => dec!(86400),
            TimeUnit::Week => dec!(604800),
            TimeUnit::Month => dec!(2629743.768),
            TimeUnit::Year => dec!(31556925.216),
        }
    }

    /// Returns the display suffix, e.g. the "mo" in "$1,000.00/mo"
    pub fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Second => "sec",
            TimeUnit::Minute => "min",
            TimeUnit::Hour => "hr",
            TimeUnit::Day => "day",
            TimeUnit::Week => "wk",
            TimeUnit::Month => "mo",
            TimeUnit::Year => "yr",
        }
    }
}

/// Errors that can occur during rate operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Square root of a negative rate")]
    NegativeSqrt,
}

/// An amount of money that recurs once every time unit, such as $10/mo
///
/// Rates with different units can be combined; the result is expressed per
/// month, the canonical unit for cross-rate arithmetic. Scaling by a plain
/// number keeps the original unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoneyRate {
    amount: Decimal,
    per: TimeUnit,
}

impl MoneyRate {
    /// Creates a new rate of `amount` money per `per` time
    pub fn new(amount: Decimal, per: TimeUnit) -> Self {
        Self { amount, per }
    }

    /// Creates a monthly rate
    pub fn monthly(amount: Decimal) -> Self {
        Self::new(amount, TimeUnit::Month)
    }

    /// Creates a yearly rate
    pub fn yearly(amount: Decimal) -> Self {
        Self::new(amount, TimeUnit::Year)
    }

    /// The canonical zero rate
    pub fn zero() -> Self {
        Self::monthly(Decimal::ZERO)
    }

    /// Returns the amount per repetition
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the time between repetitions
    pub fn unit(&self) -> TimeUnit {
        self.per
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Re-expresses this rate over a different time unit
    ///
    /// The money flow stays the same: $12,000/yr converts to $1,000/mo.
    pub fn converted_to(&self, unit: TimeUnit) -> Self {
        if unit == self.per {
            return *self;
        }
        Self::new(self.amount * unit.seconds() / self.per.seconds(), unit)
    }

    /// Normalizes to the canonical monthly representation
    pub fn per_month(&self) -> Self {
        self.converted_to(TimeUnit::Month)
    }

    /// The monthly-normalized amount, for cross-rate arithmetic
    pub fn monthly_amount(&self) -> Decimal {
        self.per_month().amount
    }

    /// Scales the amount by a plain number, keeping the unit
    pub fn scaled(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.per)
    }

    /// Checked scalar division
    pub fn checked_div(&self, divisor: Decimal) -> Result<Self, RateError> {
        if divisor.is_zero() {
            return Err(RateError::DivisionByZero);
        }
        Ok(Self::new(self.amount / divisor, self.per))
    }

    /// Checked rate-by-rate division, producing a dimensionless ratio
    ///
    /// Both rates are normalized to monthly before dividing, so the units
    /// need not match.
    pub fn checked_ratio(&self, other: &Self) -> Result<Decimal, RateError> {
        let divisor = other.monthly_amount();
        if divisor.is_zero() {
            return Err(RateError::DivisionByZero);
        }
        Ok(self.monthly_amount() / divisor)
    }

    /// Rate-by-rate multiplication over monthly-normalized amounts
    pub fn monthly_product(&self, other: &Self) -> Decimal {
        self.monthly_amount() * other.monthly_amount()
    }

    /// Square root of the amount, keeping the unit
    pub fn sqrt(&self) -> Result<Self, RateError> {
        self.amount
            .sqrt()
            .map(|root| Self::new(root, self.per))
            .ok_or(RateError::NegativeSqrt)
    }

    /// Raises the amount to an integer power, keeping the unit
    pub fn powi(&self, exp: i64) -> Self {
        Self::new(self.amount.powi(exp), self.per)
    }

    /// Returns true if the two rates represent the same money flow within
    /// [`RATE_TOLERANCE`]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self.monthly_amount() - other.monthly_amount()).abs() <= RATE_TOLERANCE
    }
}

impl Default for MoneyRate {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for MoneyRate {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::monthly(self.monthly_amount() + other.monthly_amount())
    }
}

impl Sub for MoneyRate {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::monthly(self.monthly_amount() - other.monthly_amount())
    }
}

impl Neg for MoneyRate {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount, self.per)
    }
}

impl Mul<Decimal> for MoneyRate {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.scaled(factor)
    }
}

impl Div<Decimal> for MoneyRate {
    type Output = Self;

    fn div(self, divisor: Decimal) -> Self {
        self.checked_div(divisor)
            .expect("Division by zero in MoneyRate::div")
    }
}

impl Div for MoneyRate {
    type Output = Decimal;

    fn div(self, other: Self) -> Decimal {
        self.checked_ratio(&other)
            .expect("Division by zero rate in MoneyRate::div")
    }
}

impl Sum for MoneyRate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for MoneyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.amount.abs().round_dp(2);
        let text = format!("{rounded:.2}");
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if self.amount < Decimal::ZERO { "-" } else { "" };
        write!(f, "{sign}${grouped}.{frac_part}/{}", self.per.suffix())
    }
}
