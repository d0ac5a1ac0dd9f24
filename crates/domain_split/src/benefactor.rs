//! Benefactors feeding the shared money pool

use serde::{Deserialize, Serialize};

use core_kernel::{MoneyRate, PersonId};

/// A person who contributes a fixed rate of money, to be distributed
/// across the roommates who designate them as their funding source
///
/// The id refers to a [`Person`](crate::Person) record; a benefactor no
/// roommate draws from distributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefactor {
    /// The contributing person
    pub id: PersonId,
    /// How much money they feed into the pool over time
    pub contribution: MoneyRate,
}

impl Benefactor {
    pub fn new(id: PersonId, contribution: MoneyRate) -> Self {
        Self { id, contribution }
    }
}
