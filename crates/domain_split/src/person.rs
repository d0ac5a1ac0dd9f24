//! People participating in a split

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::PersonId;

/// A person known to the splitter
///
/// The id is fixed at creation; the name can change freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier within one allocator's id space
    pub id: PersonId,
    /// The person's name, like `"Luz Noceda"`
    pub name: String,
}

impl Person {
    /// Creates a new person with the given name
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Creates a person with an auto-generated name
    ///
    /// Also used as the placeholder when a split references a person record
    /// that no longer exists.
    pub fn unnamed(id: PersonId) -> Self {
        Self::new(id, Self::generated_name(id))
    }

    /// Generates a name for a person who has not been named
    pub fn generated_name(id: PersonId) -> String {
        format!("Person #{id}")
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnamed_person_gets_generated_name() {
        let person = Person::unnamed(PersonId::from_raw(3));
        assert_eq!(person.name, "Person #3");
    }

    #[test]
    fn test_display() {
        let person = Person::new(PersonId::from_raw(1), "Eda Clawthorne");
        assert_eq!(person.to_string(), "1: Eda Clawthorne");
    }
}
