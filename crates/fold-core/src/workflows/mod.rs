//! # Workflows Module
//!
//! The public, user-facing layer. It ties the [`crate::core`] model and the
//! [`crate::engine`] search machinery together into complete procedures:
//! a one-shot [`search`] run, and a wall-clock-bounded [`experiment`] that
//! aggregates best-of results across repeated runs.

pub mod experiment;
pub mod search;
