//! Roommates and their funding sources

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{MoneyRate, PersonId};

/// Where a roommate's money comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Funding {
    /// The roommate earns this rate directly
    Income(MoneyRate),

    /// The roommate receives a share of a benefactor's contribution,
    /// proportional to `weight` relative to the weights of everyone else
    /// drawing from the same benefactor
    FromBenefactor {
        benefactor_id: PersonId,
        weight: Decimal,
    },
}

impl Funding {
    /// Draws from a benefactor with the default weight of 1
    pub fn from_benefactor(benefactor_id: PersonId) -> Self {
        Self::FromBenefactor {
            benefactor_id,
            weight: Decimal::ONE,
        }
    }

    /// Draws from a benefactor with an explicit non-negative weight
    pub fn from_benefactor_weighted(benefactor_id: PersonId, weight: Decimal) -> Self {
        Self::FromBenefactor {
            benefactor_id,
            weight,
        }
    }
}

/// A person living alongside others who funds and owes a share of the
/// household expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roommate {
    /// The person this roommate role belongs to
    pub id: PersonId,
    /// Where their money comes from
    pub funding: Funding,
}

impl Roommate {
    pub fn new(id: PersonId, funding: Funding) -> Self {
        Self { id, funding }
    }
}
