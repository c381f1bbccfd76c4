use thiserror::Error;

/// Failure reported by a `HistoryStore`.
///
/// Every variant carries a message fit to show the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("please fill in the {0}")]
    MissingField(&'static str),

    #[error("that username or e-mail is already registered")]
    DuplicateAccount,

    #[error("wrong username or password")]
    InvalidCredentials,

    #[error("no account named {0}")]
    UnknownUser(String),

    #[error("could not secure the password: {0}")]
    Credentials(String),

    #[error("the history service is unavailable: {0}")]
    Unavailable(String),
}
