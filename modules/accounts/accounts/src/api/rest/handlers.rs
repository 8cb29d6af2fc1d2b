use std::sync::Arc;

use accounts_sdk::{Account, AccountUpdate};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, OriginalUri, Path};
use axum::response::Html;
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::service::Service;

use super::dto::{AccountDto, CreateAccountReq, UpdateAccountReq};
use super::error::{domain_error_to_problem, json_rejection_to_problem};
use super::problem::ApiResult;

const HOME_PAGE: &str = include_str!("home.html");

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub async fn create_account(
    OriginalUri(uri): OriginalUri,
    Extension(svc): Extension<Arc<Service>>,
    body: Result<Json<CreateAccountReq>, JsonRejection>,
) -> ApiResult<Json<AccountDto>> {
    let Json(req) = body.map_err(|r| json_rejection_to_problem(&r, uri.path()))?;
    let to_problem = |e: DomainError| domain_error_to_problem(&e, uri.path());
    let account: Account = req.try_into().map_err(to_problem)?;
    let created = svc.create_account(account).await.map_err(to_problem)?;
    Ok(Json(created.into()))
}

pub async fn list_accounts(
    OriginalUri(uri): OriginalUri,
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<Json<Vec<AccountDto>>> {
    let accounts = svc
        .list_accounts()
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(accounts.into_iter().map(AccountDto::from).collect()))
}

pub async fn get_account(
    OriginalUri(uri): OriginalUri,
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> ApiResult<Json<AccountDto>> {
    let account = svc
        .get_account(&id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(account.into()))
}

pub async fn update_account(
    OriginalUri(uri): OriginalUri,
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateAccountReq>, JsonRejection>,
) -> ApiResult<Json<AccountDto>> {
    let Json(req) = body.map_err(|r| json_rejection_to_problem(&r, uri.path()))?;
    let to_problem = |e: DomainError| domain_error_to_problem(&e, uri.path());
    let update: AccountUpdate = req.try_into().map_err(to_problem)?;
    let account = svc.update_account(&id, update).await.map_err(to_problem)?;
    Ok(Json(account.into()))
}

pub async fn delete_account(
    OriginalUri(uri): OriginalUri,
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> ApiResult<Json<AccountDto>> {
    info!(account_id = %id, "Deleting account via REST");
    let removed = svc
        .delete_account(&id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(removed.into()))
}
