//! Session-scoped client preferences.
//!
//! The invoice store persists its page-size choice here so the next
//! session comes back with the same layout. Embedders may back this with
//! whatever their platform offers; the in-memory implementation covers
//! tests and single-session use.

use std::collections::HashMap;
use std::sync::Mutex;

/// Key under which the invoice list page size is persisted.
pub const INVOICE_PAGE_SIZE_KEY: &str = "invoices.page-size";

pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}
