use super::residue::Sequence;
use super::step::{Folding, Step};
use nalgebra::Point3;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FoldingError {
    #[error("Folding has {actual} steps but the sequence has {expected} bonds")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Self-intersection: step {at_index} revisits an occupied coordinate")]
    SelfIntersection { at_index: usize },
}

/// The concrete placement of every residue on the cubic grid, derived from a
/// `(Sequence, Folding)` pair.
///
/// A state only exists for valid foldings: construction walks the steps from
/// the origin and rejects any path that revisits a coordinate, so all held
/// coordinates are pairwise distinct by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeState {
    coords: Vec<Point3<i32>>,
}

impl LatticeState {
    /// Applies a complete folding to a sequence. The folding must assign
    /// exactly one step per bond.
    pub fn fold(sequence: &Sequence, folding: &Folding) -> Result<Self, FoldingError> {
        if folding.len() != sequence.bond_count() {
            return Err(FoldingError::LengthMismatch {
                expected: sequence.bond_count(),
                actual: folding.len(),
            });
        }
        Self::walk(sequence, folding.steps())
    }

    /// Applies a leading portion of a folding, placing the first
    /// `steps.len() + 1` residues. Used by frame-wise search to score
    /// partial candidates.
    pub(crate) fn fold_prefix(sequence: &Sequence, steps: &[Step]) -> Result<Self, FoldingError> {
        if steps.len() > sequence.bond_count() {
            return Err(FoldingError::LengthMismatch {
                expected: sequence.bond_count(),
                actual: steps.len(),
            });
        }
        Self::walk(sequence, steps)
    }

    fn walk(sequence: &Sequence, steps: &[Step]) -> Result<Self, FoldingError> {
        if sequence.is_empty() {
            return Ok(Self { coords: Vec::new() });
        }

        let mut coords = Vec::with_capacity(steps.len() + 1);
        let mut visited = HashSet::with_capacity(steps.len() + 1);

        let origin = Point3::origin();
        coords.push(origin);
        visited.insert(origin);

        for (at_index, step) in steps.iter().enumerate() {
            let next = coords[at_index] + step.displacement();
            if !visited.insert(next) {
                return Err(FoldingError::SelfIntersection { at_index });
            }
            coords.push(next);
        }

        Ok(Self { coords })
    }

    pub fn coords(&self) -> &[Point3<i32>] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}
