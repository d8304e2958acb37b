//! 2ch API module.
//!
//! Provides:
//! - HTTP client for the mobile JSON API
//! - Thread response type definitions

pub mod client;
pub mod types;

pub use client::DvachApi;
pub use types::{Post, ThreadFile, ThreadResponse};
