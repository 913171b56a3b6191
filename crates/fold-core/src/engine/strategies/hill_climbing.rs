use super::SearchStrategy;
use crate::core::energy::params::ContactParams;
use crate::core::models::residue::Sequence;
use crate::engine::config::HillClimbingConfig;
use crate::engine::error::EngineError;
use crate::engine::evaluate::Evaluator;
use crate::engine::neighborhood::{random_valid_folding, single_site_neighbors};
use crate::engine::state::RunReport;
use rand::RngCore;
use tracing::{debug, instrument, trace};

/// Steepest-descent local search: from a random valid start, move to the
/// best single-position neighbor while it strictly improves the score.
/// A unit runs the configured number of independent restarts.
#[derive(Debug)]
pub struct HillClimbing {
    sequence: Sequence,
    params: ContactParams,
    config: HillClimbingConfig,
}

impl HillClimbing {
    pub fn new(sequence: Sequence, params: ContactParams, config: HillClimbingConfig) -> Self {
        Self {
            sequence,
            params,
            config,
        }
    }

    fn climb(
        &self,
        evaluator: &Evaluator<'_>,
        report: &mut RunReport,
        rng: &mut dyn RngCore,
    ) -> bool {
        let Some((mut current, mut current_score)) =
            random_valid_folding(evaluator, self.config.max_start_attempts, rng)
        else {
            return false;
        };
        report.record(&current, current_score);

        for iteration in 0..self.config.max_iterations {
            let mut best_neighbor = None;
            for neighbor in single_site_neighbors(&current) {
                if let Ok(score) = evaluator.evaluate(&neighbor) {
                    let improves = match &best_neighbor {
                        Some((_, best_score)) => score < *best_score,
                        None => true,
                    };
                    if improves {
                        best_neighbor = Some((neighbor, score));
                    }
                }
            }

            match best_neighbor {
                Some((folding, score)) if score < current_score => {
                    current = folding;
                    current_score = score;
                    report.record(&current, current_score);
                }
                _ => {
                    trace!(iteration, score = current_score, "Local optimum reached.");
                    break;
                }
            }
        }
        true
    }
}

impl SearchStrategy for HillClimbing {
    fn name(&self) -> &'static str {
        "HillClimbing"
    }

    #[instrument(level = "debug", skip_all, name = "hill_climbing_unit")]
    fn run_unit(&mut self, rng: &mut dyn RngCore) -> Result<RunReport, EngineError> {
        let evaluator = Evaluator::new(&self.sequence, &self.params);
        let mut report = RunReport::default();

        for restart in 0..self.config.restarts {
            if !self.climb(&evaluator, &mut report, rng) {
                debug!(restart, "No valid starting folding found; restart skipped.");
            }
        }
        Ok(report)
    }
}
