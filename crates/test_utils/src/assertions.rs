//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use core_kernel::{MoneyRate, RATE_TOLERANCE};
use domain_split::{Benefactor, Expense, Split};

/// Asserts that two rates represent the same money flow within the
/// standard tolerance
///
/// # Panics
///
/// Panics if the monthly-normalized amounts differ by more than
/// [`RATE_TOLERANCE`]
pub fn assert_rate_approx_eq(actual: MoneyRate, expected: MoneyRate) {
    assert!(
        actual.approx_eq(&expected),
        "Rates differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        (actual.monthly_amount() - expected.monthly_amount()).abs(),
        RATE_TOLERANCE
    );
}

/// Asserts that two dimensionless decimals are approximately equal
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={actual}, expected={expected}, diff={diff}, tolerance={tolerance}"
    );
}

/// Asserts that the owed amounts for one expense sum back to the
/// expense's own rate
///
/// # Panics
///
/// Panics if the expense is conserved by nobody (no participating share)
/// or if the participating shares do not add up to the expense's rate
pub fn assert_expense_conserved(split: &Split, expense: &Expense) {
    let total: MoneyRate = split
        .shares
        .iter()
        .filter_map(|share| share.owed_for(expense.id))
        .sum();
    assert_rate_approx_eq(total, expense.rate);
}

/// Asserts that a benefactor's distributed rates sum back to their
/// contribution
///
/// Only meaningful for benefactors with at least one beneficiary; a
/// benefactor nobody draws from distributes nothing.
pub fn assert_benefactor_conserved(split: &Split, benefactor: &Benefactor) {
    let total: MoneyRate = split
        .shares
        .iter()
        .filter_map(|share| share.benefits.get(&benefactor.id).copied())
        .sum();
    assert_rate_approx_eq(total, benefactor.contribution);
}
