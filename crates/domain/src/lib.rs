//! # sedes-domain
//!
//! Pure domain model for the sedes service.
//!
//! ## Responsibilities
//! - Foundational types: the numeric [`SedeId`](id::SedeId) and error conventions
//! - Define the **Sede** (a campus site or branch: a name and an address)
//! - Define merge-patch semantics for partial updates
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod sede;
