//! invoicing-client: cached data-access stores over the goahead
//! invoicing REST API.
//!
//! The [`stores::InvoiceStore`] keeps one page of invoices consistent
//! with the server across filtering, sorting and mutations; the
//! [`stores::CustomerStore`] mirrors the customer collection. Transport
//! failures and server rejections surface unmodified as
//! [`client_core::error::ClientError`].

pub mod config;
pub mod models;
pub mod services;
pub mod stores;

pub use client_core::error::ClientError;
pub use config::Settings;
pub use services::{ApiClient, StaticTokenProvider, TokenProvider};
pub use stores::{CustomerStore, InvoiceStore, MemoryPreferences, PreferenceStore};
