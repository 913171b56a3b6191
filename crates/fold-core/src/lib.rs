//! # hpfold Core Library
//!
//! A library for finding low-energy foldings of HP/HPC-model protein chains
//! on the cubic lattice, using a family of heuristic search strategies.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (sequences,
//!   step codes, self-avoiding lattice states), the pure contact-energy
//!   scorer, and tabular I/O utilities.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates the
//!   search process: strategy configuration, candidate generation, the shared
//!   validity-and-score evaluator, and the search strategies themselves
//!   (random sampling, hill climbing, simulated annealing, frame-wise
//!   exploration, exhaustive enumeration).
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the `engine` and `core` together into complete procedures: one-
//!   shot search runs and wall-clock-bounded experiments.

pub mod core;
pub mod engine;
pub mod workflows;
