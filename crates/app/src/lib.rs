//! # sedes-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage port** that adapters must implement (driven/outbound):
//!   - `SedeRepository` — opens a transaction scope
//!   - `SedeTransaction` — save, exists, find, list, delete, commit
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `SedeService` — create, update, partial update, get, list, delete
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (an in-memory store)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `sedes-domain` only (plus `tokio::sync` for the in-memory store).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod memory_store;
pub mod ports;
pub mod services;
