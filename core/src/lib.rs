//! Synchronous client core for the blog post service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round-trip, which keeps
//! this crate deterministic and free of I/O dependencies.
//!
//! Each CRUD operation is split into `build_*` (produces a request) and
//! `parse_*` (consumes a response), so the I/O boundary is explicit.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::BlogClient;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{BlogPost, CreateBlogPost, UpdateBlogPost};
