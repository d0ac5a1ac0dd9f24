//! Test Data Builders
//!
//! Provides a builder for constructing splitter scenarios with
//! deterministic ids. Tests specify only the people and expenses they
//! care about and get a ready-to-use [`MoneySplitter`] back.

use rust_decimal::Decimal;

use core_kernel::{ExpenseId, IdentityAllocator, MoneyRate, PersonId};
use domain_split::{Benefactor, Expense, Funding, MoneySplitter, Person, Roommate};

/// Builder for splitter scenarios
///
/// Ids come from a fresh [`IdentityAllocator`], so the first person added
/// is always id 0, the next id 1, and so on, making assertions on
/// specific ids stable.
#[derive(Default)]
pub struct ScenarioBuilder {
    ids: IdentityAllocator,
    people: Vec<Person>,
    roommates: Vec<Roommate>,
    benefactors: Vec<Benefactor>,
    expenses: Vec<Expense>,
}

impl ScenarioBuilder {
    /// Creates an empty scenario
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person who is neither a roommate nor a benefactor
    pub fn person(&mut self, name: &str) -> PersonId {
        let person = Person::new(self.ids.next_person_id(), name);
        let id = person.id;
        self.people.push(person);
        id
    }

    /// Adds a roommate living on their own monthly income
    pub fn earner(&mut self, name: &str, monthly_income: Decimal) -> PersonId {
        let id = self.person(name);
        self.roommates.push(Roommate::new(
            id,
            Funding::Income(MoneyRate::monthly(monthly_income)),
        ));
        id
    }

    /// Adds a person contributing a monthly rate into the pool
    pub fn benefactor(&mut self, name: &str, monthly_contribution: Decimal) -> PersonId {
        let id = self.person(name);
        self.benefactors
            .push(Benefactor::new(id, MoneyRate::monthly(monthly_contribution)));
        id
    }

    /// Adds a roommate funded by a benefactor with the default weight
    pub fn beneficiary(&mut self, name: &str, benefactor: PersonId) -> PersonId {
        self.weighted_beneficiary(name, benefactor, Decimal::ONE)
    }

    /// Adds a roommate funded by a benefactor with an explicit weight
    pub fn weighted_beneficiary(
        &mut self,
        name: &str,
        benefactor: PersonId,
        weight: Decimal,
    ) -> PersonId {
        let id = self.person(name);
        self.roommates.push(Roommate::new(
            id,
            Funding::from_benefactor_weighted(benefactor, weight),
        ));
        id
    }

    /// Adds a roommate role without a person record
    pub fn roommate_without_person(&mut self, funding: Funding) -> PersonId {
        let id = self.ids.next_person_id();
        self.roommates.push(Roommate::new(id, funding));
        id
    }

    /// Adds an expense everyone participates in
    pub fn expense(&mut self, name: &str, monthly_rate: Decimal) -> ExpenseId {
        let expense = Expense::new(
            self.ids.next_expense_id(),
            name,
            MoneyRate::monthly(monthly_rate),
        );
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    /// Adds an expense restricted to the given participants
    pub fn expense_for(
        &mut self,
        name: &str,
        monthly_rate: Decimal,
        participants: &[PersonId],
    ) -> ExpenseId {
        let expense = Expense::new(
            self.ids.next_expense_id(),
            name,
            MoneyRate::monthly(monthly_rate),
        )
        .with_participants(participants.iter().copied());
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    /// Builds the splitter, computing its first split
    pub fn build(self) -> MoneySplitter {
        MoneySplitter::new(self.people, self.roommates, self.benefactors, self.expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ids_are_deterministic() {
        let mut scenario = ScenarioBuilder::new();
        let first = scenario.earner("Amity", dec!(1000));
        let second = scenario.earner("Luz", dec!(1000));
        let rent = scenario.expense("Rent", dec!(500));

        assert_eq!(first, PersonId::from_raw(0));
        assert_eq!(second, PersonId::from_raw(1));
        assert_eq!(rent, ExpenseId::from_raw(2));
    }

    #[test]
    fn test_built_splitter_has_a_split() {
        let mut scenario = ScenarioBuilder::new();
        scenario.earner("Amity", dec!(1000));
        scenario.expense("Rent", dec!(500));

        let splitter = scenario.build();
        assert_eq!(splitter.split().shares.len(), 1);
    }
}
