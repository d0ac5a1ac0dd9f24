//! Domain error types

use thiserror::Error;

use core_kernel::{ExpenseId, PersonId};

/// Errors from splitter operations
///
/// All of these are soft: the splitter leaves its state untouched and the
/// cached split stays valid. Missing references inside a computation never
/// surface here at all; the engine degrades them to placeholders and zero
/// funding instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("No person with id {0}")]
    PersonNotFound(PersonId),

    #[error("No expense with id {0}")]
    ExpenseNotFound(ExpenseId),

    #[error("No roommate with id {0}")]
    RoommateNotFound(PersonId),

    #[error("No benefactor with id {0}")]
    BenefactorNotFound(PersonId),
}
