//! Account and match-history store.
//!
//! The engine treats storage as an external collaborator behind the
//! `HistoryStore` trait. `MemoryStore` is the in-process implementation used
//! by tests and the simulator; a networked store implements the same trait.
//!
//! Store failures never reach match state: a failed save leaves the finished
//! match as it is, and a failed history fetch degrades to an empty view
//! (`load_history`).

mod error;
mod memory;
mod password;
mod record;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use record::{MatchRecord, PlayerRecord};

use log::warn;
use serde::{Deserialize, Serialize};

/// A registered account, without credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub created_at_ms: u64,
}

/// Accounts plus completed-match records.
pub trait HistoryStore: Send + Sync {
    /// Create an account. Username and e-mail must both be unused.
    fn register(&self, username: &str, email: &str, password: &str) -> Result<(), StoreError>;

    /// Verify credentials.
    fn authenticate(&self, username: &str, password: &str) -> Result<User, StoreError>;

    /// Persist a finished match for `username`.
    fn save_record(&self, username: &str, record: &MatchRecord) -> Result<(), StoreError>;

    /// All matches recorded for `username`, newest first.
    fn fetch_history(&self, username: &str) -> Result<Vec<MatchRecord>, StoreError>;

    /// Start a password reset. No mail is actually sent.
    fn request_password_reset(&self, email: &str) -> Result<(), StoreError>;
}

/// History as shown to a user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryView {
    pub records: Vec<MatchRecord>,
    /// The fetch failed; `records` is empty and a retry may succeed.
    pub stale: bool,
}

/// Fetch history, degrading any failure to an empty, stale view.
pub fn load_history<S: HistoryStore + ?Sized>(store: &S, username: &str) -> HistoryView {
    match store.fetch_history(username) {
        Ok(records) => HistoryView {
            records,
            stale: false,
        },
        Err(e) => {
            warn!("history fetch for {} failed: {}", username, e);
            HistoryView {
                records: Vec::new(),
                stale: true,
            }
        }
    }
}
