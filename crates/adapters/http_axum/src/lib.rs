//! # sedes-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** for sedes under `/api/sedes`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: status codes, `Location`,
//!   and the `X-{app}-alert` / `X-{app}-params` alert headers
//! - Map [`SedesError`](sedes_domain::error::SedesError) into problem bodies
//!
//! ## Dependency rule
//! Depends on `sedes-app` (for port traits and services) and `sedes-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod headers;
pub mod router;
pub mod state;
