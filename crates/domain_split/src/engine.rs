//! The allocation engine
//!
//! Pure computation from the entity collections to a [`Split`] snapshot,
//! in three stages: each benefactor's contribution is distributed across
//! its beneficiaries by weight, each roommate's funding is resolved to a
//! monthly rate and pooled, and each expense is apportioned across its
//! participants in proportion to their funding.
//!
//! Missing references never abort the computation. A roommate without a
//! person record is reported under a placeholder person; a roommate
//! drawing from an unknown benefactor resolves to zero income. Callers are
//! responsible for keeping rates and weights non-negative and finite;
//! the engine does not validate them.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use core_kernel::{MoneyRate, PersonId};

use crate::benefactor::Benefactor;
use crate::expense::Expense;
use crate::person::Person;
use crate::roommate::{Funding, Roommate};
use crate::split::{ExpenseShare, ResolvedFunding, RoommateShare, Split};

/// Resolved monthly rates per benefactor, per beneficiary
type Distributions = BTreeMap<PersonId, BTreeMap<PersonId, MoneyRate>>;

/// Computes the current split from scratch
///
/// Deterministic given the same inputs: shares follow the input roommate
/// order, the expense shares inside each follow the input expense order,
/// and benefits iterate in ascending benefactor id.
pub fn compute(
    people: &[Person],
    roommates: &[Roommate],
    benefactors: &[Benefactor],
    expenses: &[Expense],
) -> Split {
    let distributions = distribute_contributions(benefactors, roommates);

    let resolved: Vec<(ResolvedFunding, MoneyRate)> = roommates
        .iter()
        .map(|roommate| resolve_funding(roommate, people, &distributions))
        .collect();
    let total_funds: Decimal = resolved
        .iter()
        .map(|(_, rate)| rate.monthly_amount())
        .sum();

    let shares = roommates
        .iter()
        .zip(resolved)
        .map(|(roommate, (funding, rate))| {
            let fraction = if total_funds.is_zero() {
                Decimal::ZERO
            } else {
                rate.monthly_amount() / total_funds
            };
            build_share(roommate, funding, fraction, people, expenses, &distributions)
        })
        .collect();

    debug!(
        roommates = roommates.len(),
        benefactors = benefactors.len(),
        expenses = expenses.len(),
        "computed split"
    );
    Split { shares }
}

/// Stage A: split every benefactor's contribution across its
/// beneficiaries by weight
///
/// A benefactor nobody draws from gets an empty table and distributes
/// nothing. When beneficiaries exist but every weight is zero, the
/// contribution splits evenly: an all-zero weighting expresses no
/// preference, not a refusal of the money.
fn distribute_contributions(benefactors: &[Benefactor], roommates: &[Roommate]) -> Distributions {
    let mut distributions = Distributions::new();

    for benefactor in benefactors {
        let monthly = benefactor.contribution.per_month();
        let beneficiaries: Vec<(PersonId, Decimal)> = roommates
            .iter()
            .filter_map(|roommate| match roommate.funding {
                Funding::FromBenefactor {
                    benefactor_id,
                    weight,
                } if benefactor_id == benefactor.id => Some((roommate.id, weight)),
                _ => None,
            })
            .collect();

        let mut resolved = BTreeMap::new();
        if !beneficiaries.is_empty() {
            let total_weight: Decimal = beneficiaries.iter().map(|(_, weight)| *weight).sum();
            let even_share = Decimal::ONE / Decimal::from(beneficiaries.len() as u64);

            for (roommate_id, weight) in beneficiaries {
                let fraction = if total_weight.is_zero() {
                    even_share
                } else {
                    weight / total_weight
                };
                resolved.insert(roommate_id, monthly.scaled(fraction));
            }
        }
        distributions.insert(benefactor.id, resolved);
    }

    distributions
}

/// Stage B: resolve one roommate's funding to a concrete rate
fn resolve_funding(
    roommate: &Roommate,
    people: &[Person],
    distributions: &Distributions,
) -> (ResolvedFunding, MoneyRate) {
    match roommate.funding {
        Funding::Income(rate) => (ResolvedFunding::Income(rate), rate),
        Funding::FromBenefactor { benefactor_id, .. } => {
            let granted = distributions
                .get(&benefactor_id)
                .and_then(|per_roommate| per_roommate.get(&roommate.id))
                .copied();
            match granted {
                Some(rate) => {
                    let person = resolve_person(benefactor_id, people);
                    (ResolvedFunding::Benefactor { person, rate }, rate)
                }
                None => {
                    warn!(
                        roommate = %roommate.id,
                        benefactor = %benefactor_id,
                        "roommate draws from an unknown benefactor; treating funding as zero"
                    );
                    (ResolvedFunding::Income(MoneyRate::zero()), MoneyRate::zero())
                }
            }
        }
    }
}

/// Stage C: apportion every expense this roommate participates in
fn build_share(
    roommate: &Roommate,
    funding: ResolvedFunding,
    fraction: Decimal,
    people: &[Person],
    expenses: &[Expense],
    distributions: &Distributions,
) -> RoommateShare {
    let person = resolve_person(roommate.id, people);

    let mut owed = Vec::new();
    let mut expense_sum = MoneyRate::zero();
    for expense in expenses.iter().filter(|expense| expense.involves(roommate.id)) {
        let amount_owed = expense.rate.scaled(fraction);
        expense_sum = expense_sum + amount_owed;
        owed.push(ExpenseShare {
            expense_id: expense.id,
            participant_id: roommate.id,
            amount_owed,
        });
    }

    let benefits = distributions
        .iter()
        .filter_map(|(benefactor_id, per_roommate)| {
            per_roommate
                .get(&roommate.id)
                .map(|rate| (*benefactor_id, *rate))
        })
        .collect();

    RoommateShare {
        person,
        funding,
        expenses: owed,
        expense_sum,
        benefits,
    }
}

fn resolve_person(id: PersonId, people: &[Person]) -> Person {
    people
        .iter()
        .find(|person| person.id == id)
        .cloned()
        .unwrap_or_else(|| {
            warn!(person = %id, "no person record; using a placeholder");
            Person::unnamed(id)
        })
}
