//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the rent split test suite.
//!
//! # Modules
//!
//! - `builders`: Scenario builder for splitter test setups
//! - `assertions`: Custom assertion helpers for domain types

pub mod assertions;
pub mod builders;

pub use assertions::*;
pub use builders::*;
