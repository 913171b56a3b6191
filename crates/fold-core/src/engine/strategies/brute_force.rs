use super::SearchStrategy;
use crate::core::energy::params::ContactParams;
use crate::core::models::residue::Sequence;
use crate::core::models::step::{Folding, Step};
use crate::engine::config::BruteForceConfig;
use crate::engine::error::EngineError;
use crate::engine::evaluate::Evaluator;
use crate::engine::state::RunReport;
use rand::RngCore;
use tracing::{instrument, warn};

// Above this bond count the 6^n enumeration stops being a practical oracle.
const TRACTABLE_BOND_COUNT: usize = 12;

/// Exhaustive enumeration of the entire folding space, used as a
/// correctness oracle for short sequences.
#[derive(Debug)]
pub struct BruteForce {
    sequence: Sequence,
    params: ContactParams,
    #[allow(dead_code)]
    config: BruteForceConfig,
}

impl BruteForce {
    pub fn new(sequence: Sequence, params: ContactParams, config: BruteForceConfig) -> Self {
        Self {
            sequence,
            params,
            config,
        }
    }
}

impl SearchStrategy for BruteForce {
    fn name(&self) -> &'static str {
        "BruteForce"
    }

    #[instrument(level = "debug", skip_all, name = "brute_force_unit")]
    fn run_unit(&mut self, rng: &mut dyn RngCore) -> Result<RunReport, EngineError> {
        let _ = rng; // enumeration is deterministic
        let evaluator = Evaluator::new(&self.sequence, &self.params);
        let bond_count = self.sequence.bond_count();
        let mut report = RunReport::default();

        if bond_count > TRACTABLE_BOND_COUNT {
            warn!(
                bond_count,
                "Brute force over 6^n foldings; this will take a very long time."
            );
        }

        if bond_count == 0 {
            let folding = Folding::default();
            if let Ok(score) = evaluator.evaluate(&folding) {
                report.record(&folding, score);
            }
            return Ok(report);
        }

        // Odometer over the six step codes per bond position.
        let mut indices = vec![0usize; bond_count];
        'enumeration: loop {
            let folding = Folding::new(indices.iter().map(|&i| Step::ALL[i]).collect());
            if let Ok(score) = evaluator.evaluate(&folding) {
                report.record(&folding, score);
            }

            let mut position = 0;
            loop {
                indices[position] += 1;
                if indices[position] < Step::ALL.len() {
                    break;
                }
                indices[position] = 0;
                position += 1;
                if position == bond_count {
                    break 'enumeration;
                }
            }
        }

        Ok(report)
    }
}
