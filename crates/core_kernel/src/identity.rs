//! Runtime-unique entity identifiers
//!
//! Newtype wrappers around a small numeric id space, plus the allocator
//! that issues them. Ids are only unique within one allocator; a process
//! loading persisted data registers the existing ids before allocating new
//! ones. The allocator is an explicit value passed to whoever creates
//! entities, so tests stay deterministic and parallel-safe.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Raw value backing every entity id
pub type RawId = u16;

macro_rules! define_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(RawId);

        impl $name {
            /// Creates an id from a raw value
            pub fn from_raw(raw: RawId) -> Self {
                Self(raw)
            }

            /// Returns the raw value
            pub fn raw(&self) -> RawId {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<RawId> for $name {
            fn from(raw: RawId) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for RawId {
            fn from(id: $name) -> RawId {
                id.0
            }
        }
    };
}

define_id!(
    PersonId,
    "Identifies a person, and the roommate or benefactor roles attached to them"
);
define_id!(ExpenseId, "Identifies a recurring expense");

/// Errors from misusing the identity allocator
///
/// These indicate a programming bug in the calling code rather than bad
/// user data: ids are only registered by loading existing entities, and
/// only released when an entity is dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Id {0} is already registered")]
    AlreadyRegistered(RawId),

    #[error("Id {0} was never registered")]
    NotRegistered(RawId),
}

/// Issues and tracks ids that are unique across all entities it manages
///
/// People and expenses draw from the same id space, so no two live
/// entities created through one allocator ever share an id. Allocation
/// always hands out the lowest free id; released ids become available
/// again, lowest-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityAllocator {
    used: BTreeSet<RawId>,
    min_available: RawId,
}

impl IdentityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds, registers, and returns the lowest id not currently in use
    pub fn allocate(&mut self) -> RawId {
        let id = self.min_available;
        self.used.insert(id);
        self.advance_past(id);
        id
    }

    /// Allocates a fresh person id
    pub fn next_person_id(&mut self) -> PersonId {
        PersonId::from_raw(self.allocate())
    }

    /// Allocates a fresh expense id
    pub fn next_expense_id(&mut self) -> ExpenseId {
        ExpenseId::from_raw(self.allocate())
    }

    /// Marks an externally-created id as in use
    ///
    /// Useful when loading entities that already carry ids. Registering an
    /// id twice is an error.
    pub fn register(&mut self, id: RawId) -> Result<(), IdentityError> {
        if !self.used.insert(id) {
            return Err(IdentityError::AlreadyRegistered(id));
        }
        self.advance_past(id);
        Ok(())
    }

    /// Returns an id to the pool of available ids
    ///
    /// Releasing an id that was never registered is an error.
    pub fn release(&mut self, id: RawId) -> Result<(), IdentityError> {
        if !self.used.remove(&id) {
            return Err(IdentityError::NotRegistered(id));
        }
        if id < self.min_available {
            self.min_available = id;
        }
        Ok(())
    }

    /// Returns true if the id is currently in use
    pub fn is_registered(&self, id: RawId) -> bool {
        self.used.contains(&id)
    }

    /// Number of ids currently in use
    pub fn live_count(&self) -> usize {
        self.used.len()
    }

    fn advance_past(&mut self, id: RawId) {
        if id == self.min_available {
            self.min_available = (id..=RawId::MAX)
                .find(|candidate| !self.used.contains(candidate))
                .unwrap_or(RawId::MAX);
        }
    }
}
