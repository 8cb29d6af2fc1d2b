#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for accounts integration tests.
//!
//! Provides in-memory stores, a ready router and sample records.

#![allow(dead_code)] // Not every test binary uses every helper

use std::path::Path;
use std::sync::Arc;

use accounts::config::DatabaseConfig;
use accounts::domain::service::Service;
use accounts::infra::storage::{self, SeaOrmAccountsRepository};
use accounts::{Account, AccountUpdate, Tags};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

/// Fresh in-memory store with the schema applied.
///
/// # Panics
/// Panics if the store cannot be opened.
pub async fn inmem_db() -> DatabaseConnection {
    storage::open(&DatabaseConfig::in_memory(), Path::new("."))
        .await
        .expect("Failed to open in-memory store")
}

/// In-memory store that has not been migrated.
pub async fn bare_inmem_db() -> DatabaseConnection {
    storage::connect(&DatabaseConfig::in_memory(), Path::new("."))
        .await
        .expect("Failed to connect to in-memory store")
}

pub fn service(db: &DatabaseConnection) -> Arc<Service> {
    Arc::new(Service::new(Arc::new(SeaOrmAccountsRepository::new(
        db.clone(),
    ))))
}

pub async fn app() -> (DatabaseConnection, Router) {
    let db = inmem_db().await;
    let router = accounts::api::rest::router(service(&db));
    (db, router)
}

pub fn sample_update(email: &str) -> AccountUpdate {
    AccountUpdate {
        balance: "$1,234.56".to_owned(),
        credit: 700,
        picture: "http://placehold.it/32x32".to_owned(),
        name_first: "Ada".to_owned(),
        name_last: "Lovelace".to_owned(),
        employer: "ENGINE".to_owned(),
        email: email.to_owned(),
        phone: "+1 (800) 555-0100".to_owned(),
        address: "12 Analytical Way".to_owned(),
        comments: "first".to_owned(),
        created: "2015-05-08T11:41:30 +04:00".to_owned(),
        tags: Tags::from_iter(["alpha", "beta"]),
    }
}

pub fn sample_account(id: &str) -> Account {
    Account::from_update(id.to_owned(), sample_update(&format!("{id}@x.com")))
}

/// One JSONL line for `id`, with `credit` as a string the way exports carry it.
pub fn jsonl_line(id: &str) -> String {
    serde_json::json!({
        "id": id,
        "balance": "$1,234.56",
        "credit": "700",
        "picture": "http://placehold.it/32x32",
        "name_first": "Ada",
        "name_last": "Lovelace",
        "employer": "ENGINE",
        "email": format!("{id}@x.com"),
        "phone": "+1 (800) 555-0100",
        "address": "12 Analytical Way",
        "comments": "first",
        "created": "2015-05-08T11:41:30 +04:00",
        "tags": ["alpha", "beta"],
    })
    .to_string()
}

pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}
