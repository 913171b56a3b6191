//! Data structures of the lattice model: residue kinds and sequences, step
//! codes, and the derived self-avoiding lattice state.

pub mod lattice;
pub mod residue;
pub mod step;
