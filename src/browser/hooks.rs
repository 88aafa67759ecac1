//! Error reporting hook for failed fetches

use crate::catalog::{CardQuery, FetchError};

/// Receives every fetch failure that reaches the session
///
/// Failures never surface as UI state; this is the one place they go.
pub trait ErrorHook: Send {
    fn report(&self, query: &CardQuery, error: &FetchError);
}

/// Default hook: a warning in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorHook;

impl ErrorHook for TracingErrorHook {
    fn report(&self, query: &CardQuery, error: &FetchError) {
        tracing::warn!(
            page = query.page,
            name = %query.name,
            "Failed to fetch cards: {}",
            error
        );
    }
}
