//! Which path produced a repository result.

use common::{AppError, AppResult};

/// Result of an operation that may have been served from the fallback store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The remote API answered and its answer is authoritative
    Remote(T),
    /// The remote API was unusable; `value` came from the fallback store
    Fallback { value: T, diagnostic: String },
}

impl<T> Outcome<T> {
    /// Classify a remote attempt.
    ///
    /// Recoverable failures turn into `Fallback` carrying `candidate`;
    /// anything else is returned as the error.
    pub fn settle(attempt: AppResult<T>, candidate: impl FnOnce() -> T) -> AppResult<Self> {
        match attempt {
            Ok(value) => Ok(Outcome::Remote(value)),
            Err(err) if err.is_recoverable() => Ok(Outcome::Fallback {
                value: candidate(),
                diagnostic: diagnostic(&err),
            }),
            Err(err) => Err(err),
        }
    }

    /// Split into the value and the optional diagnostic.
    pub fn into_parts(self) -> (T, Option<String>) {
        match self {
            Outcome::Remote(value) => (value, None),
            Outcome::Fallback { value, diagnostic } => (value, Some(diagnostic)),
        }
    }
}

/// Advisory message shown when the fallback store answered instead.
pub fn diagnostic(err: &AppError) -> String {
    match err {
        AppError::Parse(reason) => format!("{}. Using mock data instead.", reason),
        other => format!("{}. Using mock data instead.", other),
    }
}
