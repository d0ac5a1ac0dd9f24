//! The money splitter orchestration shell

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use rust_decimal_macros::dec;
use tracing::warn;

use core_kernel::{ExpenseId, IdentityAllocator, MoneyRate, PersonId};

use crate::benefactor::Benefactor;
use crate::engine;
use crate::error::SplitError;
use crate::expense::Expense;
use crate::person::Person;
use crate::roommate::{Funding, Roommate};
use crate::split::Split;

/// Owns the entity collections and keeps a cached [`Split`] consistent
/// with them
///
/// Every mutating operation applies its change and synchronously
/// recomputes the cached split; there is no deferred recomputation and no
/// dirty-flag skipping. Collections are expected to stay small (tens of
/// entries), so full recomputation wins over incremental bookkeeping.
///
/// The splitter is single-threaded. Clone a [`Split`] out of [`split`](Self::split)
/// to keep a snapshot; later mutations never touch snapshots already
/// handed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneySplitter {
    people: Vec<Person>,
    roommates: Vec<Roommate>,
    benefactors: Vec<Benefactor>,
    expenses: Vec<Expense>,
    split: Split,
}

impl MoneySplitter {
    /// Creates a splitter and immediately computes its first split
    pub fn new(
        people: Vec<Person>,
        roommates: Vec<Roommate>,
        benefactors: Vec<Benefactor>,
        expenses: Vec<Expense>,
    ) -> Self {
        let split = engine::compute(&people, &roommates, &benefactors, &expenses);
        Self {
            people,
            roommates,
            benefactors,
            expenses,
            split,
        }
    }

    /// A small example household: two roommates with disparate incomes
    /// splitting rent and utilities
    pub fn sample_disparate_incomes(ids: &mut IdentityAllocator) -> Self {
        let first = Person::unnamed(ids.next_person_id());
        let second = Person::unnamed(ids.next_person_id());
        let income = MoneyRate::monthly(dec!(1200));
        let roommates = vec![
            Roommate::new(first.id, Funding::Income(income)),
            Roommate::new(second.id, Funding::Income(income)),
        ];
        let expenses = Self::sample_expenses(ids);
        Self::new(vec![first, second], roommates, Vec::new(), expenses)
    }

    /// A small example household where one benefactor funds everyone,
    /// themselves included
    pub fn sample_money_pooling(ids: &mut IdentityAllocator) -> Self {
        let patron = Person::unnamed(ids.next_person_id());
        let first = Person::unnamed(ids.next_person_id());
        let second = Person::unnamed(ids.next_person_id());
        let benefactor = Benefactor::new(patron.id, MoneyRate::monthly(dec!(2400)));
        let roommates = vec![
            Roommate::new(first.id, Funding::from_benefactor(patron.id)),
            Roommate::new(second.id, Funding::from_benefactor(patron.id)),
            Roommate::new(patron.id, Funding::from_benefactor(patron.id)),
        ];
        let expenses = Self::sample_expenses(ids);
        Self::new(
            vec![patron, first, second],
            roommates,
            vec![benefactor],
            expenses,
        )
    }

    fn sample_expenses(ids: &mut IdentityAllocator) -> Vec<Expense> {
        vec![
            Expense::new(
                ids.next_expense_id(),
                "Rent",
                MoneyRate::monthly(dec!(1000)),
            ),
            Expense::new(
                ids.next_expense_id(),
                "Utilities",
                MoneyRate::monthly(dec!(100)),
            ),
        ]
    }

    // ------------------------------------------------------------------
    // Reads

    /// The split for the current collections
    pub fn split(&self) -> &Split {
        &self.split
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn roommates(&self) -> &[Roommate] {
        &self.roommates
    }

    pub fn benefactors(&self) -> &[Benefactor] {
        &self.benefactors
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    pub fn roommate(&self, id: PersonId) -> Option<&Roommate> {
        self.roommates.iter().find(|roommate| roommate.id == id)
    }

    pub fn benefactor(&self, id: PersonId) -> Option<&Benefactor> {
        self.benefactors.iter().find(|benefactor| benefactor.id == id)
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// The monthly-normalized sum of every expense's rate, independent of
    /// how the expenses are apportioned
    pub fn total_expense_rate(&self) -> MoneyRate {
        self.expenses.iter().map(|expense| expense.rate).sum()
    }

    // ------------------------------------------------------------------
    // Wholesale replacement

    pub fn set_people(&mut self, people: Vec<Person>) {
        self.people = people;
        self.recompute();
    }

    pub fn set_roommates(&mut self, roommates: Vec<Roommate>) {
        self.roommates = roommates;
        self.recompute();
    }

    pub fn set_benefactors(&mut self, benefactors: Vec<Benefactor>) {
        self.benefactors = benefactors;
        self.recompute();
    }

    pub fn set_expenses(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
        self.recompute();
    }

    // ------------------------------------------------------------------
    // Addition and removal

    pub fn add_person(&mut self, person: Person) {
        self.people.push(person);
        self.recompute();
    }

    pub fn remove_person(&mut self, id: PersonId) -> Result<(), SplitError> {
        let index = self
            .people
            .iter()
            .position(|person| person.id == id)
            .ok_or_else(|| Self::not_found(SplitError::PersonNotFound(id)))?;
        self.people.remove(index);
        self.recompute();
        Ok(())
    }

    pub fn add_roommate(&mut self, roommate: Roommate) {
        self.roommates.push(roommate);
        self.recompute();
    }

    pub fn remove_roommate(&mut self, id: PersonId) -> Result<(), SplitError> {
        let index = self
            .roommates
            .iter()
            .position(|roommate| roommate.id == id)
            .ok_or_else(|| Self::not_found(SplitError::RoommateNotFound(id)))?;
        self.roommates.remove(index);
        self.recompute();
        Ok(())
    }

    pub fn add_benefactor(&mut self, benefactor: Benefactor) {
        self.benefactors.push(benefactor);
        self.recompute();
    }

    pub fn remove_benefactor(&mut self, id: PersonId) -> Result<(), SplitError> {
        let index = self
            .benefactors
            .iter()
            .position(|benefactor| benefactor.id == id)
            .ok_or_else(|| Self::not_found(SplitError::BenefactorNotFound(id)))?;
        self.benefactors.remove(index);
        self.recompute();
        Ok(())
    }

    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
        self.recompute();
    }

    pub fn remove_expense(&mut self, id: ExpenseId) -> Result<(), SplitError> {
        let index = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or_else(|| Self::not_found(SplitError::ExpenseNotFound(id)))?;
        self.expenses.remove(index);
        self.recompute();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Field-level mutation
    //
    // One explicit method per mutable field, so the mutation surface stays
    // statically checkable. A miss leaves the splitter untouched.

    pub fn rename_person(
        &mut self,
        id: PersonId,
        name: impl Into<String>,
    ) -> Result<(), SplitError> {
        let person = self
            .people
            .iter_mut()
            .find(|person| person.id == id)
            .ok_or_else(|| Self::not_found(SplitError::PersonNotFound(id)))?;
        person.name = name.into();
        self.recompute();
        Ok(())
    }

    pub fn set_expense_name(
        &mut self,
        id: ExpenseId,
        name: impl Into<String>,
    ) -> Result<(), SplitError> {
        let expense = self.expense_mut(id)?;
        expense.name = name.into();
        self.recompute();
        Ok(())
    }

    pub fn set_expense_rate(&mut self, id: ExpenseId, rate: MoneyRate) -> Result<(), SplitError> {
        let expense = self.expense_mut(id)?;
        expense.rate = rate;
        self.recompute();
        Ok(())
    }

    pub fn set_expense_participants(
        &mut self,
        id: ExpenseId,
        participants: BTreeSet<PersonId>,
    ) -> Result<(), SplitError> {
        let expense = self.expense_mut(id)?;
        expense.participant_ids = participants;
        self.recompute();
        Ok(())
    }

    pub fn set_roommate_funding(
        &mut self,
        id: PersonId,
        funding: Funding,
    ) -> Result<(), SplitError> {
        let roommate = self
            .roommates
            .iter_mut()
            .find(|roommate| roommate.id == id)
            .ok_or_else(|| Self::not_found(SplitError::RoommateNotFound(id)))?;
        roommate.funding = funding;
        self.recompute();
        Ok(())
    }

    pub fn set_benefactor_contribution(
        &mut self,
        id: PersonId,
        contribution: MoneyRate,
    ) -> Result<(), SplitError> {
        let benefactor = self
            .benefactors
            .iter_mut()
            .find(|benefactor| benefactor.id == id)
            .ok_or_else(|| Self::not_found(SplitError::BenefactorNotFound(id)))?;
        benefactor.contribution = contribution;
        self.recompute();
        Ok(())
    }

    fn expense_mut(&mut self, id: ExpenseId) -> Result<&mut Expense, SplitError> {
        self.expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or_else(|| Self::not_found(SplitError::ExpenseNotFound(id)))
    }

    fn not_found(error: SplitError) -> SplitError {
        warn!(%error, "mutation targeted a missing entity; nothing changed");
        error
    }

    fn recompute(&mut self) {
        self.split = engine::compute(
            &self.people,
            &self.roommates,
            &self.benefactors,
            &self.expenses,
        );
    }
}

impl fmt::Display for MoneySplitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "People:")?;
        for person in &self.people {
            write!(f, "\n{person}")?;
        }
        write!(f, "\n\nExpenses:")?;
        for expense in &self.expenses {
            write!(f, "\n{expense}")?;
        }
        Ok(())
    }
}
