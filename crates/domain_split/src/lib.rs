//! Expense splitting domain
//!
//! Computes how roommates fairly share recurring expenses, given each
//! roommate's funding source: a personal income, or a weighted draw from a
//! benefactor who contributes into a shared pool.
//!
//! The interesting work happens in [`engine::compute`], a pure function
//! from the entity collections to an immutable [`Split`] snapshot. The
//! [`MoneySplitter`] shell owns the collections, applies mutations, and
//! recomputes the cached split after every change.

pub mod benefactor;
pub mod engine;
pub mod error;
pub mod expense;
pub mod person;
pub mod roommate;
pub mod split;
pub mod splitter;

pub use benefactor::Benefactor;
pub use error::SplitError;
pub use expense::Expense;
pub use person::Person;
pub use roommate::{Funding, Roommate};
pub use split::{ExpenseShare, ResolvedFunding, RoommateShare, Split};
pub use splitter::MoneySplitter;
