//! Tabular output formats: the experiment result record and the
//! `amino,fold` folding record consumed by external tooling.

pub mod folding;
pub mod report;
