//! TestHub server library.
//!
//! This library provides the core functionality for the test configuration
//! management server: the in-memory store, domain models, and API handlers.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod store;
