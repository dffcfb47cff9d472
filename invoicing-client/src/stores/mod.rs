pub mod customers;
pub mod invoices;
pub mod preferences;

pub use customers::CustomerStore;
pub use invoices::InvoiceStore;
pub use preferences::{MemoryPreferences, PreferenceStore, INVOICE_PAGE_SIZE_KEY};

use std::sync::atomic::{AtomicUsize, Ordering};

/// Keeps a store's in-flight counter accurate on every exit path,
/// success or failure.
pub(crate) struct LoadGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> LoadGuard<'a> {
    pub(crate) fn new(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}
