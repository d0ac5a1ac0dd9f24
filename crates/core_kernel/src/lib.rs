//! Core Kernel - Foundational types and utilities for the rent split system
//!
//! This crate provides the fundamental building blocks used across the domain modules:
//! - Money-per-time rates with precise decimal arithmetic
//! - Runtime-unique entity identifiers and the allocator that issues them
//! - Common error types

pub mod error;
pub mod identity;
pub mod rate;

pub use error::CoreError;
pub use identity::{ExpenseId, IdentityAllocator, IdentityError, PersonId, RawId};
pub use rate::{MoneyRate, RateError, TimeUnit, RATE_TOLERANCE};
