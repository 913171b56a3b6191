use super::params::ContactParams;
use crate::core::models::lattice::LatticeState;
use crate::core::models::residue::ResidueKind;
use crate::core::models::step::Step;
use nalgebra::Point3;
use std::collections::HashMap;

/// Evaluates the contact energy of a placed chain.
///
/// Scoring is a pure function of the residue kinds and their coordinates:
/// every unordered pair of residues that is unit-adjacent in space but at
/// chain distance >= 2 contributes its table energy once.
///
/// Instead of the quadratic all-pairs scan, an occupancy hash keyed by
/// coordinate lets each residue probe its six lattice neighbors directly,
/// so a full evaluation is O(N) expected.
pub struct Scorer<'a> {
    params: &'a ContactParams,
}

impl<'a> Scorer<'a> {
    pub fn new(params: &'a ContactParams) -> Self {
        Self { params }
    }

    /// Total contact energy of `state`. `residues` must be the kinds the
    /// state was folded from, in chain order.
    pub fn score(&self, residues: &[ResidueKind], state: &LatticeState) -> i32 {
        debug_assert_eq!(residues.len(), state.len());

        let occupancy: HashMap<Point3<i32>, usize> = state
            .coords()
            .iter()
            .enumerate()
            .map(|(index, coord)| (*coord, index))
            .collect();

        let mut total = 0;
        for (i, coord) in state.coords().iter().enumerate() {
            for step in Step::ALL {
                if let Some(&j) = occupancy.get(&(*coord + step.displacement())) {
                    // Count each unordered pair once and skip covalent pairs.
                    if j >= i + 2 {
                        total += self.params.contact_energy(residues[i], residues[j]);
                    }
                }
            }
        }
        total
    }
}
