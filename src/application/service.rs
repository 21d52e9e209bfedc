use tracing::debug;

use crate::domain::{Account, Amount};

use super::AppError;

/// Application service owning the in-memory account ledger.
/// This is the primary interface for any client (CLI, tests, etc.).
///
/// Accounts live in insertion order for the lifetime of the process; nothing
/// is ever removed or persisted. Lookups are a linear scan that acts on the
/// first account whose number matches exactly, so duplicate numbers are
/// silently shadowed by the earliest one.
#[derive(Debug, Default)]
pub struct LedgerService {
    accounts: Vec<Account>,
}

impl LedgerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new account to the ledger.
    ///
    /// Always succeeds: duplicate account numbers and negative opening
    /// balances are accepted, matching the leniency of the original system.
    pub fn create_account(
        &mut self,
        number: impl Into<String>,
        holder_name: impl Into<String>,
        initial_balance: Amount,
    ) -> &Account {
        let account = Account::new(number, holder_name, initial_balance);
        debug!(
            number = account.number(),
            balance = account.balance(),
            "account created"
        );
        self.accounts.push(account);
        self.accounts.last().expect("just pushed")
    }

    /// All accounts in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Deposit into the first account matching `number`.
    /// Returns the new balance.
    pub fn deposit(&mut self, number: &str, amount: Amount) -> Result<Amount, AppError> {
        let balance = self.find_account_mut(number)?.deposit(amount)?;
        debug!(number, amount, balance, "deposit");
        Ok(balance)
    }

    /// Withdraw from the first account matching `number`.
    /// Returns the new balance.
    pub fn withdraw(&mut self, number: &str, amount: Amount) -> Result<Amount, AppError> {
        let balance = self.find_account_mut(number)?.withdraw(amount)?;
        debug!(number, amount, balance, "withdrawal");
        Ok(balance)
    }

    /// Overwrite the holder name of the first account matching `number`.
    pub fn rename_holder(&mut self, number: &str, new_name: &str) -> Result<(), AppError> {
        let account = self.find_account_mut(number)?;
        account.set_holder_name(new_name);
        debug!(number, holder = new_name, "holder renamed");
        Ok(())
    }

    fn find_account_mut(&mut self, number: &str) -> Result<&mut Account, AppError> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or_else(|| AppError::AccountNotFound(number.to_string()))
    }
}
