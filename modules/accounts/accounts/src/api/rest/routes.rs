use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use super::handlers;
use crate::domain::service::Service;

/// Build the accounts router around an already constructed service.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/account/", post(handlers::create_account))
        .route("/account", get(handlers::list_accounts))
        .route(
            "/account/{id}",
            get(handlers::get_account)
                .put(handlers::update_account)
                .delete(handlers::delete_account),
        )
        .layer(Extension(service))
}
