//! Accounts SDK
//!
//! This crate provides the public API for the accounts module:
//! - `AccountsApi` trait for in-process consumers
//! - Model types (`Account`, `AccountUpdate`, `Tags`)
//! - Error type (`AccountsError`)

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::AccountsApi;
pub use errors::AccountsError;
pub use models::{Account, AccountUpdate, Tags};
