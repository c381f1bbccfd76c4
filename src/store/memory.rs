//! In-memory `HistoryStore`.

use log::{debug, info};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::error::StoreError;
use super::password::{hash as hash_password, verify as verify_password};
use super::record::MatchRecord;
use super::{HistoryStore, User};
use crate::core::log::unix_millis;

#[derive(Clone, Debug)]
struct Account {
    user: User,
    /// argon2 PHC string.
    password_hash: String,
}

#[derive(Debug, Default)]
struct Tables {
    accounts: FxHashMap<String, Account>,
    /// Newest record last.
    history: FxHashMap<String, Vec<MatchRecord>>,
}

/// Thread-safe in-memory store.
///
/// Can be switched offline to exercise the degraded paths:
///
/// ```
/// use kariba::store::{load_history, HistoryStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.register("ana", "ana@example.com", "pw").unwrap();
///
/// store.set_available(false);
/// let view = load_history(&store, "ana");
/// assert!(view.stale);
/// assert!(view.records.is_empty());
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the backing service going up or down.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store is offline".into()));
        }
        self.tables
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".into()))
    }
}

fn required(value: &str, field: &'static str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        Err(StoreError::MissingField(field))
    } else {
        Ok(())
    }
}

impl HistoryStore for MemoryStore {
    fn register(&self, username: &str, email: &str, password: &str) -> Result<(), StoreError> {
        required(username, "username")?;
        required(email, "e-mail")?;
        required(password, "password")?;

        let password_hash =
            hash_password(password).map_err(|e| StoreError::Credentials(e.to_string()))?;

        let mut tables = self.tables()?;
        let taken = tables
            .accounts
            .values()
            .any(|a| a.user.username == username || a.user.email.eq_ignore_ascii_case(email));
        if taken {
            return Err(StoreError::DuplicateAccount);
        }

        tables.accounts.insert(
            username.to_string(),
            Account {
                user: User {
                    username: username.to_string(),
                    email: email.to_string(),
                    created_at_ms: unix_millis(),
                },
                password_hash,
            },
        );
        info!("registered account {}", username);
        Ok(())
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<User, StoreError> {
        let tables = self.tables()?;
        tables
            .accounts
            .get(username)
            .filter(|a| verify_password(password, &a.password_hash))
            .map(|a| a.user.clone())
            .ok_or(StoreError::InvalidCredentials)
    }

    fn save_record(&self, username: &str, record: &MatchRecord) -> Result<(), StoreError> {
        let mut tables = self.tables()?;
        if !tables.accounts.contains_key(username) {
            return Err(StoreError::UnknownUser(username.to_string()));
        }
        tables
            .history
            .entry(username.to_string())
            .or_default()
            .push(record.clone());
        debug!("saved match {} for {}", record.id, username);
        Ok(())
    }

    fn fetch_history(&self, username: &str) -> Result<Vec<MatchRecord>, StoreError> {
        let tables = self.tables()?;
        let mut records = tables.history.get(username).cloned().unwrap_or_default();
        records.reverse();
        records.sort_by(|a, b| b.completed_at_ms.cmp(&a.completed_at_ms));
        Ok(records)
    }

    fn request_password_reset(&self, email: &str) -> Result<(), StoreError> {
        required(email, "e-mail")?;
        let tables = self.tables()?;
        let known = tables
            .accounts
            .values()
            .any(|a| a.user.email.eq_ignore_ascii_case(email));
        debug!("password reset requested (known address: {})", known);
        Ok(())
    }
}
