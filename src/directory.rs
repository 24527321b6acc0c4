use crate::account::{Account, AccountKind};
use crate::error::{BankError, BankResult};
use crate::store::AccountStore;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::warn;

/// In-memory account directory backed by an [`AccountStore`]. The map is
/// loaded once at startup and is the sole source of truth for the run;
/// every successful mutation rewrites the full backing store.
pub struct AccountDirectory {
    store: AccountStore,
    accounts: HashMap<String, Account>,
}

impl AccountDirectory {
    pub fn open(store: AccountStore) -> Self {
        let accounts = store.load_all();
        Self { store, accounts }
    }

    pub fn create_account(
        &mut self,
        number: &str,
        holder: &str,
        kind: AccountKind,
    ) -> BankResult<()> {
        if self.accounts.contains_key(number) {
            return Err(BankError::DuplicateAccount(number.to_string()));
        }

        self.accounts
            .insert(number.to_string(), Account::new(number, holder, kind));
        self.persist();
        Ok(())
    }

    pub fn deposit(&mut self, number: &str, amount: Decimal) -> BankResult<()> {
        self.lookup_mut(number)?.deposit(amount)?;
        self.persist();
        Ok(())
    }

    pub fn withdraw(&mut self, number: &str, amount: Decimal) -> BankResult<()> {
        self.lookup_mut(number)?.withdraw(amount)?;
        self.persist();
        Ok(())
    }

    pub fn balance(&self, number: &str) -> BankResult<&Account> {
        self.accounts
            .get(number)
            .ok_or_else(|| BankError::AccountNotFound(number.to_string()))
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn lookup_mut(&mut self, number: &str) -> BankResult<&mut Account> {
        self.accounts
            .get_mut(number)
            .ok_or_else(|| BankError::AccountNotFound(number.to_string()))
    }

    // A failed write is reported and the process keeps running; the mutation
    // stays in memory and the next successful save lands it.
    fn persist(&self) {
        if let Err(err) = self.store.save_all(&self.accounts) {
            warn!("failed to save account data: {err}");
        }
    }
}
