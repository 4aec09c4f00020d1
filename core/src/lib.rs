//! Sans-IO API client for the doTask service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the actual HTTP round-trip,
//! which keeps the client deterministic and testable without a server.
//!
//! # Design
//! - `TodoClient` is stateless and holds only `base_url`.
//! - Each endpoint is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; the integration
//!   test catches schema drift between the two.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, DeleteConfirmation, Todo, UpdateTodo, Welcome};
