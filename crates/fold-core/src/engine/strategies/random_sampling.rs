use super::SearchStrategy;
use crate::core::energy::params::ContactParams;
use crate::core::models::residue::Sequence;
use crate::engine::config::RandomSamplingConfig;
use crate::engine::error::EngineError;
use crate::engine::evaluate::Evaluator;
use crate::engine::neighborhood::random_folding;
use crate::engine::state::RunReport;
use rand::RngCore;
use tracing::{debug, instrument};

/// Baseline strategy: independent uniform draws over the folding space,
/// keeping the best valid candidate.
#[derive(Debug)]
pub struct RandomSampling {
    sequence: Sequence,
    params: ContactParams,
    config: RandomSamplingConfig,
}

impl RandomSampling {
    pub fn new(sequence: Sequence, params: ContactParams, config: RandomSamplingConfig) -> Self {
        Self {
            sequence,
            params,
            config,
        }
    }
}

impl SearchStrategy for RandomSampling {
    fn name(&self) -> &'static str {
        "RandomSampling"
    }

    #[instrument(level = "debug", skip_all, name = "random_sampling_unit")]
    fn run_unit(&mut self, rng: &mut dyn RngCore) -> Result<RunReport, EngineError> {
        let evaluator = Evaluator::new(&self.sequence, &self.params);
        let bond_count = self.sequence.bond_count();
        let mut report = RunReport::default();

        let mut valid = 0;
        let mut attempts = 0;
        while valid < self.config.samples && attempts < self.config.max_attempts {
            attempts += 1;
            let folding = random_folding(bond_count, rng);
            // Invalid candidates are rejected, not scored; they do not
            // count against the valid-sample budget.
            if let Ok(score) = evaluator.evaluate(&folding) {
                valid += 1;
                report.record(&folding, score);
            }
        }

        if report.best.is_none() {
            debug!(
                attempts,
                "Attempt budget exhausted without a valid folding."
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strategy(sequence: &str, config: RandomSamplingConfig) -> RandomSampling {
        RandomSampling::new(sequence.parse().unwrap(), ContactParams::default(), config)
    }

    #[test]
    fn collects_the_requested_number_of_valid_samples() {
        let mut strategy = strategy(
            "HPHPPH",
            RandomSamplingConfig {
                samples: 25,
                max_attempts: 100_000,
            },
        );
        let mut rng = StdRng::seed_from_u64(11);
        let report = strategy.run_unit(&mut rng).unwrap();

        assert_eq!(report.observed_scores.len(), 25);
        let best = report.best.unwrap();
        assert_eq!(
            best.score,
            *report.observed_scores.iter().min().unwrap()
        );
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let config = RandomSamplingConfig {
            samples: 10,
            max_attempts: 100_000,
        };
        let report_a = strategy("HCPHPH", config.clone())
            .run_unit(&mut StdRng::seed_from_u64(7))
            .unwrap();
        let report_b = strategy("HCPHPH", config)
            .run_unit(&mut StdRng::seed_from_u64(7))
            .unwrap();
        assert_eq!(report_a, report_b);
    }

    #[test]
    fn exhausted_attempt_budget_reports_no_solution() {
        let mut strategy = strategy(
            "HPHPPH",
            RandomSamplingConfig {
                samples: 1,
                max_attempts: 0,
            },
        );
        let mut rng = StdRng::seed_from_u64(1);
        let report = strategy.run_unit(&mut rng).unwrap();
        assert!(report.best.is_none());
        assert!(report.observed_scores.is_empty());
    }

    #[test]
    fn singleton_sequence_scores_zero() {
        let mut strategy = strategy(
            "H",
            RandomSamplingConfig {
                samples: 3,
                max_attempts: 10,
            },
        );
        let mut rng = StdRng::seed_from_u64(2);
        let report = strategy.run_unit(&mut rng).unwrap();
        assert_eq!(report.best.unwrap().score, 0);
    }
}
