//! Customer store integration tests against a mocked goahead service.

mod common;

use common::{customer_json, TestApp};
use invoicing_client::models::{Customer, CustomerStatus, CustomerType};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn test_customer(id: i64, name: &str, first_name: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        first_name: first_name.to_string(),
        nip: String::new(),
        regon: String::new(),
        phone: String::new(),
        mail: String::new(),
        customer_type: CustomerType::Customer,
        customer_status: CustomerStatus::Active,
        other_info: String::new(),
        address: None,
    }
}

#[tokio::test]
async fn fetch_by_status_populates_cache_once() {
    let app = TestApp::spawn().await;
    let store = app.customer_store();

    Mock::given(method("GET"))
        .and(path("/customer"))
        .and(query_param("status", "ACTIVE"))
        .and(query_param("address", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            customer_json(1, "Kowalski", "Jan", "ACTIVE"),
            customer_json(2, "Nowak", "Anna", "ACTIVE"),
        ])))
        .expect(1)
        .mount(&app.server)
        .await;

    let first = store
        .fetch_by_status("ACTIVE", false)
        .await
        .expect("fetch failed");
    assert_eq!(first.len(), 2);

    // Cache already populated; no second request goes out.
    let second = store
        .fetch_by_status("ACTIVE", false)
        .await
        .expect("fetch failed");
    assert_eq!(second.len(), 2);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn fetch_by_id_leaves_cache_untouched() {
    let app = TestApp::spawn().await;
    let store = app.customer_store();

    Mock::given(method("GET"))
        .and(path("/customer/7"))
        .and(query_param("isAddress", "true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(customer_json(7, "Kowalski", "Jan", "ACTIVE")),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let customer = store.fetch_by_id(7, true).await.expect("fetch failed");
    assert_eq!(customer.id, 7);
    assert!(store.customers().is_empty());
}

#[tokio::test]
async fn create_appends_server_row_to_cache() {
    let app = TestApp::spawn().await;
    let store = app.customer_store();

    Mock::given(method("POST"))
        .and(path("/customer"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(customer_json(3, "Wisniewska", "Ewa", "ACTIVE")),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let created = store
        .create(&test_customer(0, "Wisniewska", "Ewa"))
        .await
        .expect("create failed");
    assert_eq!(created.id, 3);
    assert_eq!(store.customers().len(), 1);
    assert_eq!(store.customer_by_id(3).unwrap().name, "Wisniewska");
}

#[tokio::test]
async fn update_replaces_cached_row() {
    let app = TestApp::spawn().await;
    let store = app.customer_store();

    Mock::given(method("POST"))
        .and(path("/customer"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(customer_json(3, "Wisniewska", "Ewa", "ACTIVE")),
        )
        .mount(&app.server)
        .await;
    store
        .create(&test_customer(0, "Wisniewska", "Ewa"))
        .await
        .expect("create failed");

    Mock::given(method("PUT"))
        .and(path("/customer"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(customer_json(3, "Zielinska", "Ewa", "ACTIVE")),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let updated = store
        .update(&test_customer(3, "Zielinska", "Ewa"))
        .await
        .expect("update failed");
    assert_eq!(updated.name, "Zielinska");
    assert_eq!(store.customer_by_id(3).unwrap().name, "Zielinska");
    assert_eq!(store.customers().len(), 1);
}

#[tokio::test]
async fn delete_removes_row_from_cache() {
    let app = TestApp::spawn().await;
    let store = app.customer_store();

    Mock::given(method("POST"))
        .and(path("/customer"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(customer_json(4, "Kowalski", "Jan", "ACTIVE")),
        )
        .mount(&app.server)
        .await;
    store
        .create(&test_customer(0, "Kowalski", "Jan"))
        .await
        .expect("create failed");

    Mock::given(method("DELETE"))
        .and(path("/customer/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.server)
        .await;

    store.delete(4).await.expect("delete failed");
    assert!(store.customers().is_empty());
}

#[tokio::test]
async fn update_status_patches_cached_row_in_place() {
    let app = TestApp::spawn().await;
    let store = app.customer_store();

    Mock::given(method("GET"))
        .and(path("/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            customer_json(1, "Kowalski", "Jan", "ACTIVE"),
        ])))
        .mount(&app.server)
        .await;
    store
        .fetch_by_status("ALL", false)
        .await
        .expect("fetch failed");

    Mock::given(method("PUT"))
        .and(path("/customer/customerstatus/1"))
        .and(body_partial_json(json!({ "value": "INACTIVE" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.server)
        .await;

    store
        .update_status(1, CustomerStatus::Inactive)
        .await
        .expect("status update failed");
    assert_eq!(
        store.customer_by_id(1).unwrap().customer_status,
        CustomerStatus::Inactive
    );
    assert!(store.active_customers().is_empty());
}

#[tokio::test]
async fn getters_read_the_cache() {
    let app = TestApp::spawn().await;
    let store = app.customer_store();

    Mock::given(method("GET"))
        .and(path("/customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            customer_json(1, "Kowalski", "Jan", "ACTIVE"),
            customer_json(2, "Nowak", "Anna", "INACTIVE"),
        ])))
        .mount(&app.server)
        .await;
    store
        .fetch_by_status("ALL", false)
        .await
        .expect("fetch failed");

    assert_eq!(
        store.customer_names(),
        vec!["Jan Kowalski".to_string(), "Anna Nowak".to_string()]
    );
    let active = store.active_customers();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, 1);
    assert!(store.customer_by_id(99).is_none());
}

#[tokio::test]
async fn customer_types_are_fetched_once() {
    let app = TestApp::spawn().await;
    let store = app.customer_store();

    Mock::given(method("GET"))
        .and(path("/customer/customertype"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["CUSTOMER", "COMPANY"])))
        .expect(1)
        .mount(&app.server)
        .await;

    let first = store.customer_types().await.expect("fetch failed");
    let second = store.customer_types().await.expect("fetch failed");
    assert_eq!(first, second);
    assert_eq!(first, vec![CustomerType::Customer, CustomerType::Company]);
}
