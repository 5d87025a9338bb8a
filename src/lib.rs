//! # Club Scheduling Backend
//!
//! Resource-scheduling and conflict-resolution core for a club-operations
//! system: trainer availability slots, PT session booking/rescheduling/
//! cancellation, and admin room assignment. The crate exposes the core as a
//! service layer over a repository abstraction, plus a REST API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Domain entity types and id newtypes
//! - [`models`]: Time window value type with the overlap predicates
//! - [`db`]: Repository pattern, storage backends, transaction scopes
//! - [`services`]: Availability ledger, session scheduler, room assignment
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Invariants
//!
//! - A trainer's declared availability windows never overlap (enforced at
//!   creation against all existing slots regardless of status).
//! - A trainer never holds two non-cancelled sessions over overlapping
//!   windows; neither does a room.
//! - Every mutating operation is atomic: a failed check leaves slot and
//!   session state untouched.

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
