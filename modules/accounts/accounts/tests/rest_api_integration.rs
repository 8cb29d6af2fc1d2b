#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of the REST API over an in-memory store.

use axum::http::StatusCode;
use serde_json::{Value, json};

mod support;
use support::{app, send};

fn a1() -> Value {
    json!({
        "id": "a1", "balance": "$100", "credit": 700, "picture": "u",
        "name_first": "A", "name_last": "B", "employer": "E",
        "email": "e@x.com", "phone": "555", "address": "addr",
        "comments": "c", "created": "2020-01-01", "tags": "[]"
    })
}

fn with_id(id: &str) -> Value {
    let mut body = a1();
    body["id"] = json!(id);
    body["email"] = json!(format!("{id}@x.com"));
    body
}

fn without_id(mut body: Value) -> Value {
    body.as_object_mut().unwrap().remove("id");
    body
}

#[tokio::test]
async fn test_create_get_delete_round_trip() {
    let (_db, router) = app().await;

    let (status, created) = send(&router, "POST", "/account/", Some(a1())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, a1());

    let (status, fetched) = send(&router, "GET", "/account/a1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, a1());

    let (status, removed) = send(&router, "DELETE", "/account/a1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, a1());

    let (status, list) = send(&router, "GET", "/account", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_list_returns_every_created_account() {
    let (_db, router) = app().await;
    let ids = ["c3", "a1", "b2"];

    for id in ids {
        let (status, _) = send(&router, "POST", "/account/", Some(with_id(id))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, list) = send(&router, "GET", "/account", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap().clone();
    assert_eq!(list.len(), ids.len());
    for id in ids {
        assert!(list.contains(&with_id(id)), "missing {id}");
    }
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let (_db, router) = app().await;
    for id in ["b", "c", "a"] {
        send(&router, "POST", "/account/", Some(with_id(id))).await;
    }

    let (_, list) = send(&router, "GET", "/account", None).await;
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_duplicate_create_is_conflict_and_keeps_row() {
    let (_db, router) = app().await;
    send(&router, "POST", "/account/", Some(a1())).await;

    let mut dup = a1();
    dup["email"] = json!("other@x.com");
    let (status, problem) = send(&router, "POST", "/account/", Some(dup)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(problem["status"], 409);
    assert_eq!(problem["code"], "ACCOUNT_ALREADY_EXISTS");
    assert_eq!(problem["instance"], "/account/");

    let (_, fetched) = send(&router, "GET", "/account/a1", None).await;
    assert_eq!(fetched, a1());
}

#[tokio::test]
async fn test_non_id_fields_need_not_be_unique() {
    let (_db, router) = app().await;
    let mut twin = a1();
    twin["id"] = json!("a2");

    let (first, _) = send(&router, "POST", "/account/", Some(a1())).await;
    let (second, _) = send(&router, "POST", "/account/", Some(twin)).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
}

#[tokio::test]
async fn test_update_replaces_fields_but_not_id() {
    let (_db, router) = app().await;
    send(&router, "POST", "/account/", Some(a1())).await;

    let mut replacement = without_id(a1());
    replacement["balance"] = json!("$5");
    replacement["credit"] = json!(1);
    replacement["phone"] = json!("0123");
    replacement["tags"] = json!(r#"["vip","late"]"#);

    let (status, updated) = send(&router, "PUT", "/account/a1", Some(replacement.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = replacement;
    expected["id"] = json!("a1");
    assert_eq!(updated, expected);

    let (_, fetched) = send(&router, "GET", "/account/a1", None).await;
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn test_update_ignores_id_in_body() {
    let (_db, router) = app().await;
    send(&router, "POST", "/account/", Some(a1())).await;

    let mut body = a1();
    body["id"] = json!("hijack");
    let (status, updated) = send(&router, "PUT", "/account/a1", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], "a1");
    let (status, _) = send(&router, "GET", "/account/hijack", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_id_is_not_found_everywhere() {
    let (_db, router) = app().await;

    let (get, problem) = send(&router, "GET", "/account/ghost", None).await;
    assert_eq!(get, StatusCode::NOT_FOUND);
    assert_eq!(problem["code"], "ACCOUNT_NOT_FOUND");
    assert_eq!(problem["instance"], "/account/ghost");

    let (put, _) = send(&router, "PUT", "/account/ghost", Some(without_id(a1()))).await;
    assert_eq!(put, StatusCode::NOT_FOUND);

    let (delete, _) = send(&router, "DELETE", "/account/ghost", None).await;
    assert_eq!(delete, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tags_accept_native_list() {
    let (_db, router) = app().await;
    let mut body = a1();
    body["tags"] = json!(["x", "y, z"]);

    let (status, created) = send(&router, "POST", "/account/", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["tags"], r#"["x","y, z"]"#);
}

#[tokio::test]
async fn test_undecodable_tags_are_unprocessable() {
    let (_db, router) = app().await;
    let mut body = a1();
    body["tags"] = json!("['x']");

    let (status, problem) = send(&router, "POST", "/account/", Some(body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(problem["code"], "ACCOUNT_VALIDATION");
    let (_, list) = send(&router, "GET", "/account", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_incomplete_body_is_problem() {
    let (_db, router) = app().await;
    let mut body = a1();
    body.as_object_mut().unwrap().remove("created");

    let (status, problem) = send(&router, "POST", "/account/", Some(body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(problem["code"], "ACCOUNT_INVALID_BODY");
    assert_eq!(problem["instance"], "/account/");
    assert!(
        problem["detail"].as_str().unwrap().contains("created"),
        "{problem}"
    );
    let (_, list) = send(&router, "GET", "/account", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_mistyped_update_body_is_problem() {
    let (_db, router) = app().await;
    send(&router, "POST", "/account/", Some(a1())).await;

    let mut body = without_id(a1());
    body["credit"] = json!("lots");
    let (status, problem) = send(&router, "PUT", "/account/a1", Some(body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(problem["code"], "ACCOUNT_INVALID_BODY");
    let (_, fetched) = send(&router, "GET", "/account/a1", None).await;
    assert_eq!(fetched, a1());
}

#[tokio::test]
async fn test_numeric_phone_is_stored_as_text() {
    let (_db, router) = app().await;
    let mut body = a1();
    body["phone"] = json!(5_550_100);

    let (status, created) = send(&router, "POST", "/account/", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["phone"], "5550100");
}
