use crate::account::{Account, AccountKind};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{info, warn};

/// One line of the backing store:
/// `<number>,<holder>,<Savings|Current>,<balance with 2 decimal digits>`
#[derive(Deserialize, Debug)]
struct RawRecord {
    number: String,
    holder: String,
    kind: String,
    balance: Decimal,
}

impl TryFrom<RawRecord> for Account {
    type Error = &'static str;

    fn try_from(record: RawRecord) -> Result<Self, Self::Error> {
        if record.balance < Decimal::ZERO {
            return Err("negative balance");
        }

        Ok(Account {
            number: record.number,
            holder: record.holder,
            kind: AccountKind::from_label(&record.kind),
            balance: record.balance,
        })
    }
}

/// Flat-file persistence for the full account set. The whole file is
/// rewritten on every save; there is no append path.
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads every record from the backing store. A missing or unopenable
    /// file is the normal first-run state and yields an empty map. Malformed
    /// records (wrong field count, unparseable or negative balance) are
    /// skipped with a warning; the records around them still load.
    pub fn load_all(&self) -> HashMap<String, Account> {
        let mut reader = match csv::ReaderBuilder::new()
            .has_headers(false)
            // field-count errors should surface per record, not abort the file
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
        {
            Ok(reader) => reader,
            Err(err) => {
                if is_not_found(&err) {
                    info!("no account data at {}, starting fresh", self.path.display());
                } else {
                    warn!("could not open {}: {err}", self.path.display());
                }
                return HashMap::new();
            }
        };

        let mut accounts = HashMap::new();
        for (index, result) in reader.deserialize::<RawRecord>().enumerate() {
            let line = index + 1;
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    warn!("skipping malformed record on line {line}: {err}");
                    continue;
                }
            };

            match Account::try_from(record) {
                Ok(account) => {
                    accounts.insert(account.number.clone(), account);
                }
                Err(reason) => warn!("skipping malformed record on line {line}: {reason}"),
            }
        }

        accounts
    }

    /// Overwrites the backing store with one record per account, in map
    /// iteration order.
    pub fn save_all(&self, accounts: &HashMap<String, Account>) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_path(&self.path)?;

        for account in accounts.values() {
            writer.serialize((
                &account.number,
                &account.holder,
                account.kind.label(),
                format!("{:.2}", account.balance.round_dp(2)),
            ))?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn is_not_found(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(io) if io.kind() == ErrorKind::NotFound)
}
