//! Session-scoped services over the store controllers.
//!
//! # Responsibility
//! - Wrap each controller call with session acquisition and release.
//! - Expose simplified create/get-all entry points per entity kind.
//!
//! # Invariants
//! - A session opened by a service call is closed before that call returns,
//!   on success and on failure.
//! - A caller-supplied session is never closed by a service.
//! - Store errors propagate unchanged; no retry.

pub mod athlete_service;
pub mod category_service;
pub mod compat;
pub mod lease;
pub mod training_center_service;
