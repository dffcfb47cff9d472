//! Customer store.
//!
//! Unpaginated list cache with local splicing after mutations, mirroring
//! the server's customer collection.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use client_core::error::ClientError;
use serde_json::json;

use crate::models::{Customer, CustomerStatus, CustomerType};
use crate::services::ApiClient;
use crate::stores::LoadGuard;

struct CustomerState {
    customers: Vec<Customer>,
    customer_types: Option<Vec<CustomerType>>,
}

pub struct CustomerStore {
    api: Arc<ApiClient>,
    state: Mutex<CustomerState>,
    in_flight: AtomicUsize,
}

impl CustomerStore {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            state: Mutex::new(CustomerState {
                customers: Vec::new(),
                customer_types: None,
            }),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.state.lock().unwrap().customers.clone()
    }

    pub fn customer_by_id(&self, customer_id: i64) -> Option<Customer> {
        self.state
            .lock()
            .unwrap()
            .customers
            .iter()
            .find(|c| c.id == customer_id)
            .cloned()
    }

    pub fn customer_names(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .customers
            .iter()
            .map(Customer::display_name)
            .collect()
    }

    pub fn active_customers(&self) -> Vec<Customer> {
        self.state
            .lock()
            .unwrap()
            .customers
            .iter()
            .filter(|c| c.customer_status == CustomerStatus::Active)
            .cloned()
            .collect()
    }

    /// Populate the cache by status (`"ACTIVE"`, `"INACTIVE"` or `"ALL"`),
    /// optionally with addresses. Skipped when the cache already holds
    /// rows, as the original client did.
    pub async fn fetch_by_status(
        &self,
        status: &str,
        with_address: bool,
    ) -> Result<Vec<Customer>, ClientError> {
        {
            let state = self.state.lock().unwrap();
            if !state.customers.is_empty() {
                return Ok(state.customers.clone());
            }
        }

        let _load = LoadGuard::new(&self.in_flight);
        let query = [
            ("status", status.to_string()),
            ("address", with_address.to_string()),
        ];
        let customers: Vec<Customer> = self.api.get_json("/customer", &query).await?;

        let mut state = self.state.lock().unwrap();
        state.customers = customers.clone();
        Ok(customers)
    }

    /// Fetch a single customer. Read-only; the cache is untouched.
    pub async fn fetch_by_id(
        &self,
        customer_id: i64,
        with_address: bool,
    ) -> Result<Customer, ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        let query = [("isAddress", with_address.to_string())];
        self.api
            .get_json(&format!("/customer/{customer_id}"), &query)
            .await
    }

    /// Create a customer and append the server's row to the cache.
    pub async fn create(&self, customer: &Customer) -> Result<Customer, ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        let created: Customer = self.api.post_json("/customer", customer).await?;
        self.state.lock().unwrap().customers.push(created.clone());
        Ok(created)
    }

    /// Update a customer, replacing the cached row in place.
    pub async fn update(&self, customer: &Customer) -> Result<Customer, ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        let updated: Customer = self.api.put_json("/customer", customer).await?;

        let mut state = self.state.lock().unwrap();
        if let Some(row) = state.customers.iter_mut().find(|c| c.id == updated.id) {
            *row = updated.clone();
        }
        Ok(updated)
    }

    /// Delete a customer and drop it from the cache.
    pub async fn delete(&self, customer_id: i64) -> Result<(), ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        self.api.delete(&format!("/customer/{customer_id}")).await?;
        self.state
            .lock()
            .unwrap()
            .customers
            .retain(|c| c.id != customer_id);
        Ok(())
    }

    /// Submit a status change and patch the cached row in place. A no-op
    /// on the cache when the row is not present.
    pub async fn update_status(
        &self,
        customer_id: i64,
        status: CustomerStatus,
    ) -> Result<(), ClientError> {
        let _load = LoadGuard::new(&self.in_flight);
        self.api
            .put_no_content(
                &format!("/customer/customerstatus/{customer_id}"),
                &json!({ "value": status.code() }),
            )
            .await?;

        let mut state = self.state.lock().unwrap();
        if let Some(row) = state.customers.iter_mut().find(|c| c.id == customer_id) {
            row.customer_status = status;
        }
        Ok(())
    }

    /// Customer-type list, fetched once and memoized.
    pub async fn customer_types(&self) -> Result<Vec<CustomerType>, ClientError> {
        {
            let state = self.state.lock().unwrap();
            if let Some(cached) = &state.customer_types {
                return Ok(cached.clone());
            }
        }

        let _load = LoadGuard::new(&self.in_flight);
        let types: Vec<CustomerType> = self.api.get_json("/customer/customertype", &[]).await?;
        self.state.lock().unwrap().customer_types = Some(types.clone());
        Ok(types)
    }
}
