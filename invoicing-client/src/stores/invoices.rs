//! Paginated invoice store.
//!
//! Holds one locally cached page of invoices under a live filter/sort
//! configuration and keeps that view consistent with the server across
//! mutations. Every mutation is followed by an authoritative reload of
//! the current page; the cache never keeps a row the server would not
//! return for that page.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use client_core::error::ClientError;
use serde_json::json;

use crate::config::{DocumentNumberSource, Settings};
use crate::models::invoice::sort_by_document_number;
use crate::models::{
    Invoice, InvoiceFilters, InvoiceItem, Page, PaymentMethod, PaymentStatus, SortDescriptor,
    SortDirection, SortField,
};
use crate::services::ApiClient;
use crate::stores::preferences::{PreferenceStore, INVOICE_PAGE_SIZE_KEY};
use crate::stores::LoadGuard;

struct PageState {
    invoices: Vec<Invoice>,
    total_elements: u64,
    current_page: u32,
    page_size: u32,
    filters: InvoiceFilters,
    sort: SortDescriptor,
}

pub struct InvoiceStore {
    api: Arc<ApiClient>,
    preferences: Arc<dyn PreferenceStore>,
    number_source: DocumentNumberSource,
    state: Mutex<PageState>,
    payment_methods: Mutex<Option<Vec<PaymentMethod>>>,
    in_flight: AtomicUsize,
    /// Monotonic fetch counter; responses carrying an older sequence are
    /// discarded instead of overwriting newer state.
    fetch_seq: AtomicU64,
}

impl InvoiceStore {
    /// Page size comes from the persisted preference when one exists,
    /// otherwise from configuration.
    pub fn new(
        api: Arc<ApiClient>,
        preferences: Arc<dyn PreferenceStore>,
        settings: &Settings,
    ) -> Self {
        let page_size = preferences
            .get(INVOICE_PAGE_SIZE_KEY)
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(settings.pagination.default_page_size);

        Self {
            api,
            preferences,
            number_source: settings.pagination.number_source,
            state: Mutex::new(PageState {
                invoices: Vec::new(),
                total_elements: 0,
                current_page: 0,
                page_size,
                filters: InvoiceFilters::default(),
                sort: SortDescriptor::default(),
            }),
            payment_methods: Mutex::new(None),
            in_flight: AtomicUsize::new(0),
            fetch_seq: AtomicU64::new(0),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Snapshot of the cached page.
    pub fn invoices(&self) -> Vec<Invoice> {
        self.state.lock().unwrap().invoices.clone()
    }

    pub fn total_elements(&self) -> u64 {
        self.state.lock().unwrap().total_elements
    }

    pub fn current_page(&self) -> u32 {
        self.state.lock().unwrap().current_page
    }

    pub fn page_size(&self) -> u32 {
        self.state.lock().unwrap().page_size
    }

    pub fn sort(&self) -> SortDescriptor {
        self.state.lock().unwrap().sort
    }

    /// Update the page-size preference, persisted for the next session.
    /// Does not trigger a reload on its own.
    pub fn set_page_size(&self, page_size: u32) -> Result<(), ClientError> {
        if page_size == 0 {
            return Err(ClientError::InvalidData(
                "page size must be greater than zero".to_string(),
            ));
        }
        self.state.lock().unwrap().page_size = page_size;
        self.preferences
            .set(INVOICE_PAGE_SIZE_KEY, &page_size.to_string());
        Ok(())
    }

    /// Replace the sort descriptor and reload from the first page.
    pub async fn set_sort(
        &self,
        field: SortField,
        direction: SortDirection,
    ) -> Result<Vec<Invoice>, ClientError> {
        self.state.lock().unwrap().sort = SortDescriptor { field, direction };
        self.fetch_page(0, None).await
    }

    /// Replace the filter descriptor and reload from the first page,
    /// optionally with a different page size.
    pub async fn set_filters(
        &self,
        filters: InvoiceFilters,
        page_size_override: Option<u32>,
    ) -> Result<Vec<Invoice>, ClientError> {
        self.state.lock().unwrap().filters = filters;
        self.fetch_page(0, page_size_override).await
    }

    /// Fetch one page under the current filter/sort configuration and
    /// replace the cache with it.
    ///
    /// When a newer fetch has started by the time this response arrives,
    /// the cache is left alone; the rows are still returned to the
    /// caller.
    pub async fn fetch_page(
        &self,
        page: u32,
        page_size_override: Option<u32>,
    ) -> Result<Vec<Invoice>, ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let (query, sort, size) = {
            let state = self.state.lock().unwrap();
            let size = page_size_override.unwrap_or(state.page_size);
            (
                build_page_query(page, size, &state.sort, &state.filters),
                state.sort,
                size,
            )
        };

        tracing::debug!(page, size, "fetching invoice page");
        let mut result: Page<Invoice> = self.api.get_json("/invoice/page", &query).await?;

        // The server orders document numbers as strings; re-sort them
        // numerically per (year, sequence).
        if sort.field == SortField::Number {
            sort_by_document_number(&mut result.content, sort.direction);
        }

        let mut state = self.state.lock().unwrap();
        if self.fetch_seq.load(Ordering::SeqCst) == seq {
            state.invoices = result.content.clone();
            state.total_elements = result.total_elements;
            state.current_page = result.number;
            state.page_size = size;
        } else {
            tracing::debug!(page, "discarding stale page response");
        }

        Ok(result.content)
    }

    /// Fetch a single invoice. Read-only; the cached page is untouched.
    pub async fn fetch_by_id(&self, invoice_id: i64) -> Result<Invoice, ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        self.api
            .get_json(&format!("/invoice/{invoice_id}"), &[])
            .await
    }

    /// Create an invoice, then reload the current page. The new row is
    /// not spliced in locally; its position under the active filter/sort
    /// is server-determined.
    pub async fn create(&self, invoice: &Invoice) -> Result<Invoice, ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        let created: Invoice = self.api.post_json("/invoice", invoice).await?;
        let page = self.current_page();
        self.fetch_page(page, None).await?;
        Ok(created)
    }

    /// Update an invoice, then reload the current page.
    pub async fn update(&self, invoice: &Invoice) -> Result<Invoice, ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        let updated: Invoice = self.api.put_json("/invoice", invoice).await?;
        let page = self.current_page();
        self.fetch_page(page, None).await?;
        Ok(updated)
    }

    /// Delete an invoice, then reload. When the cached page held exactly
    /// one row and is not page 0, the reload steps back one page so the
    /// user is never stranded on an empty page.
    pub async fn delete(&self, invoice_id: i64) -> Result<(), ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        self.api.delete(&format!("/invoice/{invoice_id}")).await?;

        let target = {
            let state = self.state.lock().unwrap();
            if state.invoices.len() == 1 && state.current_page > 0 {
                state.current_page - 1
            } else {
                state.current_page
            }
        };
        self.fetch_page(target, None).await?;
        Ok(())
    }

    /// Submit a payment-status change, patch the cached row in place for
    /// immediate feedback, then reload the current page. The status may
    /// affect filter membership, so only the reload is authoritative.
    /// The patch is a no-op when the row is not on the cached page.
    pub async fn update_status(
        &self,
        invoice_id: i64,
        status: PaymentStatus,
    ) -> Result<(), ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        self.api
            .put_no_content(
                &format!("/invoice/paymentstatus/{invoice_id}"),
                &json!({ "value": status.code() }),
            )
            .await?;

        {
            let mut state = self.state.lock().unwrap();
            if let Some(row) = state
                .invoices
                .iter_mut()
                .find(|inv| inv.id_invoice == invoice_id)
            {
                row.payment_status = status;
            }
        }

        let page = self.current_page();
        self.fetch_page(page, None).await?;
        Ok(())
    }

    /// Next document sequence number for a year.
    ///
    /// Backends with the dedicated endpoint answer directly; older ones
    /// are covered by scanning the cached entities for the highest
    /// sequence, loading the first page when nothing is cached yet. The
    /// scan only sees cached rows, so it can under-count when the
    /// relevant invoices are on other pages.
    pub async fn next_document_number(&self, year: i32) -> Result<u32, ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        match self.number_source {
            DocumentNumberSource::Remote => {
                self.api.get_json(&format!("/invoice/number/{year}"), &[]).await
            }
            DocumentNumberSource::CachedScan => {
                let cache_empty = { self.state.lock().unwrap().invoices.is_empty() };
                if cache_empty {
                    self.fetch_page(0, None).await?;
                }
                let state = self.state.lock().unwrap();
                let max = state
                    .invoices
                    .iter()
                    .filter_map(Invoice::number_parts)
                    .filter(|&(y, _)| y == year)
                    .map(|(_, sequence)| sequence)
                    .max();
                Ok(max.map_or(1, |m| m + 1))
            }
        }
    }

    /// First line item of the cached invoice with the newest sale date
    /// for a customer. Pure read over the cached page; callers must have
    /// loaded the relevant page first or accept an incomplete answer.
    pub fn latest_line_item_for_customer(&self, customer_id: i64) -> Option<InvoiceItem> {
        let state = self.state.lock().unwrap();
        let mut for_customer: Vec<&Invoice> = state
            .invoices
            .iter()
            .filter(|inv| inv.id_customer == customer_id)
            .collect();
        // Stable sort: ties keep insertion order.
        for_customer.sort_by(|a, b| b.sell_date.cmp(&a.sell_date));
        for_customer
            .first()
            .and_then(|inv| inv.invoice_items.first())
            .cloned()
    }

    /// Payment-method list, fetched once and memoized.
    pub async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, ClientError> {
        if let Some(cached) = self.payment_methods.lock().unwrap().clone() {
            return Ok(cached);
        }

        let _load = LoadGuard::new(&self.in_flight);
        let methods: Vec<PaymentMethod> = self.api.get_json("/invoice/paymenttype", &[]).await?;
        *self.payment_methods.lock().unwrap() = Some(methods.clone());
        Ok(methods)
    }
}

fn build_page_query(
    page: u32,
    size: u32,
    sort: &SortDescriptor,
    filters: &InvoiceFilters,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("page", page.to_string()),
        ("size", size.to_string()),
        ("sort", sort.field.as_query().to_string()),
        ("direction", sort.direction.as_query().to_string()),
    ];

    if let Some(global) = filters.global.as_deref() {
        if !global.is_empty() {
            query.push(("globalFilter", global.to_string()));
        }
    }

    // Only the first selected customer reaches the server; multi-select
    // customer filtering is not supported server-side.
    if let Some(customer_id) = filters.customers.first() {
        query.push(("idCustomer", customer_id.to_string()));
    }

    if let Some(date) = filters.sell_date {
        query.push(("sellDate", date.value.format("%Y-%m-%d").to_string()));
        query.push((
            "dateComparisonType",
            date.mode.date_comparison_type().to_string(),
        ));
    }

    if let Some(amount) = filters.amount {
        query.push(("amount", amount.value.to_string()));
        query.push((
            "amountComparisonType",
            amount.mode.amount_comparison_type().to_string(),
        ));
    }

    if let Some(status) = filters.status.as_deref() {
        query.push(("status", status.to_string()));
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AmountFilter, DateFilter, MatchMode};
    use chrono::NaiveDate;

    fn value_of<'a>(query: &'a [(&str, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn page_query_always_carries_paging_and_sort() {
        let query = build_page_query(
            2,
            20,
            &SortDescriptor {
                field: SortField::SellDate,
                direction: SortDirection::Ascending,
            },
            &InvoiceFilters::default(),
        );
        assert_eq!(value_of(&query, "page"), Some("2"));
        assert_eq!(value_of(&query, "size"), Some("20"));
        assert_eq!(value_of(&query, "sort"), Some("sellDate"));
        assert_eq!(value_of(&query, "direction"), Some("ASC"));
        assert_eq!(value_of(&query, "globalFilter"), None);
        assert_eq!(value_of(&query, "status"), None);
    }

    #[test]
    fn page_query_skips_empty_global_filter() {
        let filters = InvoiceFilters {
            global: Some(String::new()),
            ..Default::default()
        };
        let query = build_page_query(0, 10, &SortDescriptor::default(), &filters);
        assert_eq!(value_of(&query, "globalFilter"), None);
    }

    #[test]
    fn page_query_passes_first_selected_customer_only() {
        let filters = InvoiceFilters {
            customers: vec![7, 8, 9],
            ..Default::default()
        };
        let query = build_page_query(0, 10, &SortDescriptor::default(), &filters);
        assert_eq!(value_of(&query, "idCustomer"), Some("7"));
    }

    #[test]
    fn page_query_maps_date_and_amount_predicates() {
        let filters = InvoiceFilters {
            sell_date: Some(DateFilter {
                value: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                mode: MatchMode::DateBefore,
            }),
            amount: Some(AmountFilter {
                value: 1500.0,
                mode: MatchMode::GreaterThan,
            }),
            status: Some("TO_PAY".to_string()),
            ..Default::default()
        };
        let query = build_page_query(0, 10, &SortDescriptor::default(), &filters);
        assert_eq!(value_of(&query, "sellDate"), Some("2024-03-15"));
        assert_eq!(value_of(&query, "dateComparisonType"), Some("BEFORE"));
        assert_eq!(value_of(&query, "amount"), Some("1500"));
        assert_eq!(value_of(&query, "amountComparisonType"), Some("GREATER_THAN"));
        assert_eq!(value_of(&query, "status"), Some("TO_PAY"));
    }
}
