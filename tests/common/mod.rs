//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - Authentication test helpers
//! - In-process HTTP helpers (router + `oneshot`)
//! - Custom assertion macros

// Each integration test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod http;

pub use auth_helpers::*;
pub use database::*;
pub use http::*;
