use crate::error::{BankError, BankResult};
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Savings,
    Current,
}

impl AccountKind {
    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Current => "Current",
        }
    }

    /// Anything other than "savings" (any casing) is a current account;
    /// unrecognized labels are not rejected.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("savings") {
            AccountKind::Savings
        } else {
            AccountKind::Current
        }
    }
}

/// One bank account. The balance is the only field that changes after
/// creation, and it never goes negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub number: String,
    pub holder: String,
    pub kind: AccountKind,
    pub balance: Decimal,
}

impl Account {
    pub fn new(number: impl Into<String>, holder: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            number: number.into(),
            holder: holder.into(),
            kind,
            balance: Decimal::ZERO,
        }
    }

    pub fn deposit(&mut self, amount: Decimal) -> BankResult<()> {
        if amount <= Decimal::ZERO {
            return Err(BankError::NonPositiveAmount);
        }
        self.balance += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> BankResult<()> {
        if amount <= Decimal::ZERO {
            return Err(BankError::NonPositiveAmount);
        }
        if amount > self.balance {
            return Err(BankError::InsufficientBalance {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account: {} | Holder: {} | Type: {} | Balance: {:.2}",
            self.number,
            self.holder,
            self.kind.label(),
            self.balance.round_dp(2)
        )
    }
}
