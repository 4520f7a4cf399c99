//! Web layer for the accounts service.
//!
//! This library provides request context resolution, the login flow, the
//! GraphQL schema and the axum router serving it.

pub mod api;
pub mod auth_token;
pub mod config;
pub mod ctx;
pub mod error;
pub mod graphql;
pub mod prelude;
pub mod state;
#[cfg(test)]
mod test_utils;
pub mod user;
