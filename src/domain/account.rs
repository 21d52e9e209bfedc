use thiserror::Error;

use super::Amount;

/// Reasons an account operation can refuse to change the balance.
/// The display strings are shown to the user verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AccountError {
    #[error("Deposit amount must be positive.")]
    NonPositiveDeposit { amount: Amount },

    #[error("Withdrawal amount must be positive.")]
    NonPositiveWithdrawal { amount: Amount },

    #[error("Insufficient funds.")]
    InsufficientFunds { balance: Amount, requested: Amount },
}

/// A single bank account: identifier, holder, balance.
///
/// The account number is meant to be unique but uniqueness is not enforced
/// anywhere; the ledger resolves duplicates by first match. The balance has
/// no minimum and no rounding policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: String,
    holder_name: String,
    balance: Amount,
}

impl Account {
    pub fn new(
        number: impl Into<String>,
        holder_name: impl Into<String>,
        initial_balance: Amount,
    ) -> Self {
        Self {
            number: number.into(),
            holder_name: holder_name.into(),
            balance: initial_balance,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Overwrite the holder name unconditionally. Empty names are accepted.
    pub fn set_holder_name(&mut self, new_name: impl Into<String>) {
        self.holder_name = new_name.into();
    }

    /// Add `amount` to the balance and return the new balance.
    /// Amounts of zero or less are rejected and leave the balance unchanged.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        if amount <= 0.0 {
            return Err(AccountError::NonPositiveDeposit { amount });
        }
        self.balance += amount;
        Ok(self.balance)
    }

    /// Subtract `amount` from the balance and return the new balance.
    /// Amounts of zero or less are rejected; so is any amount greater than
    /// the current balance. Withdrawing the exact balance is allowed and
    /// leaves it at zero.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        if amount <= 0.0 {
            return Err(AccountError::NonPositiveWithdrawal { amount });
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}
