//! Shared harness for store integration tests: a wiremock server plus
//! stores wired against it.

#![allow(dead_code)]

use std::sync::Arc;

use invoicing_client::config::{
    ApiSettings, DocumentNumberSource, PaginationSettings, Settings,
};
use invoicing_client::{
    ApiClient, CustomerStore, InvoiceStore, MemoryPreferences, StaticTokenProvider,
};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";

pub struct TestApp {
    pub server: MockServer,
    pub api: Arc<ApiClient>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let server = MockServer::start().await;
        let settings = ApiSettings {
            base_url: server.uri(),
            timeout_seconds: 5,
        };
        let tokens = Arc::new(StaticTokenProvider::new(TEST_TOKEN));
        let api = Arc::new(ApiClient::new(&settings, tokens).expect("failed to build ApiClient"));
        Self { server, api }
    }

    pub fn settings(&self, number_source: DocumentNumberSource) -> Settings {
        Settings {
            api: ApiSettings {
                base_url: self.server.uri(),
                timeout_seconds: 5,
            },
            pagination: PaginationSettings {
                default_page_size: 10,
                number_source,
            },
        }
    }

    pub fn invoice_store(&self) -> InvoiceStore {
        self.invoice_store_with(DocumentNumberSource::Remote)
    }

    pub fn invoice_store_with(&self, number_source: DocumentNumberSource) -> InvoiceStore {
        InvoiceStore::new(
            self.api.clone(),
            Arc::new(MemoryPreferences::new()),
            &self.settings(number_source),
        )
    }

    pub fn customer_store(&self) -> CustomerStore {
        CustomerStore::new(self.api.clone())
    }
}

pub fn invoice_json(id: i64, customer_id: i64, number: &str, sell_date: Option<&str>) -> Value {
    json!({
        "idInvoice": id,
        "idCustomer": customer_id,
        "invoiceNumber": number,
        "sellDate": sell_date,
        "invoiceDate": null,
        "paymentDate": null,
        "paymentDeadline": 14,
        "paymentMethod": "TRANSFER",
        "paymentStatus": "TO_PAY",
        "otherInfo": "",
        "invoiceItems": [
            {
                "id": id * 100,
                "idInvoice": id,
                "name": format!("item for invoice {id}"),
                "jm": "pcs",
                "quantity": 1.0,
                "amount": 100.0
            }
        ],
        "customerName": "Test Customer"
    })
}

pub fn page_json(rows: Vec<Value>, total_elements: u64, number: u32) -> Value {
    json!({
        "content": rows,
        "totalElements": total_elements,
        "number": number
    })
}

pub fn customer_json(id: i64, name: &str, first_name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "firstName": first_name,
        "nip": "1234567890",
        "regon": "",
        "phone": "",
        "mail": "",
        "customerType": "COMPANY",
        "customerStatus": status,
        "otherInfo": "",
        "address": null
    })
}
