//! Recurring expenses

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use core_kernel::{ExpenseId, MoneyRate, PersonId};

/// A specific amount of money spent every so often for a specific reason
///
/// An empty participant set means every current roommate contributes. The
/// set is resolved at computation time, not at creation time, so roommates
/// added later automatically join open expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within one allocator's id space
    pub id: ExpenseId,
    /// The name of the expense, like `"Utilities"`
    pub name: String,
    /// How much money this expense costs over time
    pub rate: MoneyRate,
    /// Who participates in paying. Empty means everyone.
    pub participant_ids: BTreeSet<PersonId>,
}

impl Expense {
    /// Creates a new expense that everyone participates in
    pub fn new(id: ExpenseId, name: impl Into<String>, rate: MoneyRate) -> Self {
        Self {
            id,
            name: name.into(),
            rate,
            participant_ids: BTreeSet::new(),
        }
    }

    /// Restricts the expense to the given participants
    pub fn with_participants(mut self, participants: impl IntoIterator<Item = PersonId>) -> Self {
        self.participant_ids = participants.into_iter().collect();
        self
    }

    /// Returns true if the given person owes a share of this expense
    pub fn involves(&self, person: PersonId) -> bool {
        self.participant_ids.is_empty() || self.participant_ids.contains(&person)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let participants = self
            .participant_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{}: {} @ {} with participants [{participants}]",
            self.id, self.name, self.rate
        )
    }
}
