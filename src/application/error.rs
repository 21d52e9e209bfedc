use thiserror::Error;

use crate::domain::AccountError;

/// Errors surfaced to the user by ledger operations. Display strings are
/// printed verbatim by the menu loop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Account not found.")]
    AccountNotFound(String),

    #[error(transparent)]
    Account(#[from] AccountError),
}
