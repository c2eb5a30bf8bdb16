//! Reporting of failed user lookups.

use dioxus_logger::tracing;

use crate::server::error::lookup::LookupError;

/// Receives user lookup failures before they are returned to the caller.
pub trait LookupLogger: Send + Sync {
    /// Called once for each lookup that failed in the store.
    fn lookup_failed(&self, error: &LookupError);
}

impl<L: LookupLogger + ?Sized> LookupLogger for &L {
    fn lookup_failed(&self, error: &LookupError) {
        (**self).lookup_failed(error)
    }
}

/// Default [`LookupLogger`] emitting an error event through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLookupLogger;

impl LookupLogger for TracingLookupLogger {
    fn lookup_failed(&self, error: &LookupError) {
        tracing::error!(
            operation = error.operation(),
            cause = %error.db_err(),
            "{}",
            error
        );
    }
}
