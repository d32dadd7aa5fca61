//! Reload fallback for hosts without a page to refresh.
//!
//! A reload cannot be performed from inside [`PageReloader::reload`] because
//! the reset still holds the registry. The signal is raised there and the host
//! rebuilds its router once the reset has returned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::traits::PageReloader;

/// Records that a full reload was requested.
#[derive(Debug, Clone, Default)]
pub struct ReloadSignal {
    requested: Arc<AtomicBool>,
}

impl ReloadSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a reload is pending.
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Consume the pending request, returning whether there was one.
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }
}

impl PageReloader for ReloadSignal {
    fn reload(&self) {
        tracing::warn!("Full reload requested");
        self.requested.store(true, Ordering::SeqCst);
    }
}
