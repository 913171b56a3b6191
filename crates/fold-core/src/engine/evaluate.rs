use crate::core::energy::params::ContactParams;
use crate::core::energy::scoring::Scorer;
use crate::core::models::lattice::{FoldingError, LatticeState};
use crate::core::models::residue::Sequence;
use crate::core::models::step::{Folding, Step};

/// The shared validity-and-score collaborator every strategy works through:
/// apply a candidate folding, reject self-intersections, and score what
/// remains. Strategies differ only in how they propose candidates and
/// which ones they accept.
pub(crate) struct Evaluator<'a> {
    sequence: &'a Sequence,
    params: &'a ContactParams,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(sequence: &'a Sequence, params: &'a ContactParams) -> Self {
        Self { sequence, params }
    }

    pub(crate) fn sequence(&self) -> &Sequence {
        self.sequence
    }

    /// Validates and scores a complete folding.
    pub(crate) fn evaluate(&self, folding: &Folding) -> Result<i32, FoldingError> {
        let state = LatticeState::fold(self.sequence, folding)?;
        Ok(Scorer::new(self.params).score(self.sequence.residues(), &state))
    }

    /// Validates and scores a folding prefix against the matching sequence
    /// prefix; used by frame-wise search to rank partial candidates.
    pub(crate) fn evaluate_prefix(&self, steps: &[Step]) -> Result<i32, FoldingError> {
        let state = LatticeState::fold_prefix(self.sequence, steps)?;
        let residues = &self.sequence.residues()[..state.len()];
        Ok(Scorer::new(self.params).score(residues, &state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_scores_valid_foldings() {
        let sequence: Sequence = "HHHH".parse().unwrap();
        let params = ContactParams::default();
        let evaluator = Evaluator::new(&sequence, &params);

        let folding = Folding::from_codes(&[1, 2, -1]).unwrap();
        assert_eq!(evaluator.evaluate(&folding), Ok(-1));
    }

    #[test]
    fn evaluate_rejects_self_intersections() {
        let sequence: Sequence = "HHH".parse().unwrap();
        let params = ContactParams::default();
        let evaluator = Evaluator::new(&sequence, &params);

        let folding = Folding::from_codes(&[1, -1]).unwrap();
        assert!(matches!(
            evaluator.evaluate(&folding),
            Err(FoldingError::SelfIntersection { .. })
        ));
    }

    #[test]
    fn prefix_evaluation_ignores_unplaced_residues() {
        // Only the first three H residues are placed; the C tail would
        // dominate the score if it were counted.
        let sequence: Sequence = "HHHHCC".parse().unwrap();
        let params = ContactParams::default();
        let evaluator = Evaluator::new(&sequence, &params);

        let prefix = Folding::from_codes(&[1, 2]).unwrap();
        assert_eq!(evaluator.evaluate_prefix(prefix.steps()), Ok(0));
    }
}
