//! Reload counter for testing the dynamic-route reset fallback.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::traits::PageReloader;

/// A [`PageReloader`] that only counts how often it was asked to reload.
#[derive(Debug, Clone, Default)]
pub struct CountingReloader {
    count: Arc<AtomicUsize>,
}

impl CountingReloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reloads requested so far.
    pub fn reload_count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl PageReloader for CountingReloader {
    fn reload(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
