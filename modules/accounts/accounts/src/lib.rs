//! Accounts Module Implementation
//!
//! Two entry points share one `accounts` table:
//! - the loader in [`infra::ingest`] turns a JSONL file into rows in one batch;
//! - the REST API in [`api::rest`] exposes create/list/get/update/delete.
//!
//! The public API is defined in `accounts-sdk` and re-exported here.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use accounts_sdk::{Account, AccountUpdate, AccountsApi, AccountsError, Tags};

pub mod local_client;
pub use local_client::AccountsLocalClient;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
