//! The computed split snapshot

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{ExpenseId, MoneyRate, PersonId};

use crate::person::Person;

/// One roommate's portion of one expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseShare {
    /// The expense this share was carved from
    pub expense_id: ExpenseId,
    /// The roommate who owes it
    pub participant_id: PersonId,
    /// How much of the expense's rate they owe
    pub amount_owed: MoneyRate,
}

/// A roommate's funding after benefactor distribution
///
/// Carries the actual monetary rate, never the raw weight. A roommate
/// whose benefactor reference could not be resolved ends up with a zero
/// income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedFunding {
    /// Directly earned income
    Income(MoneyRate),

    /// The share received from a benefactor's contribution
    Benefactor { person: Person, rate: MoneyRate },
}

impl ResolvedFunding {
    /// The monetary rate this funding provides
    pub fn rate(&self) -> MoneyRate {
        match self {
            ResolvedFunding::Income(rate) => *rate,
            ResolvedFunding::Benefactor { rate, .. } => *rate,
        }
    }
}

/// Everything the split computed for one roommate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoommateShare {
    /// The person record, or a placeholder when the record is missing
    pub person: Person,
    /// The roommate's resolved funding
    pub funding: ResolvedFunding,
    /// The roommate's portion of every expense they participate in,
    /// in input expense order
    pub expenses: Vec<ExpenseShare>,
    /// Sum of everything owed, normalized to monthly
    pub expense_sum: MoneyRate,
    /// For every benefactor this roommate draws from, the rate received,
    /// keyed by benefactor id in ascending order
    pub benefits: BTreeMap<PersonId, MoneyRate>,
}

impl RoommateShare {
    /// The roommate's person id
    pub fn id(&self) -> PersonId {
        self.person.id
    }

    /// What this roommate owes for a specific expense, if they participate
    pub fn owed_for(&self, expense_id: ExpenseId) -> Option<MoneyRate> {
        self.expenses
            .iter()
            .find(|share| share.expense_id == expense_id)
            .map(|share| share.amount_owed)
    }
}

/// An immutable snapshot of who owes what
///
/// Produced fresh on every recomputation and never patched in place, so a
/// previously returned split stays valid no matter how the splitter's
/// collections change afterwards. Shares appear in input roommate order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub shares: Vec<RoommateShare>,
}

impl Split {
    /// Looks up the share belonging to a specific roommate
    pub fn share_for(&self, person_id: PersonId) -> Option<&RoommateShare> {
        self.shares.iter().find(|share| share.id() == person_id)
    }
}
