use super::SearchStrategy;
use crate::core::energy::params::ContactParams;
use crate::core::models::residue::Sequence;
use crate::engine::config::AnnealingConfig;
use crate::engine::error::EngineError;
use crate::engine::evaluate::Evaluator;
use crate::engine::neighborhood::{random_mutation, random_valid_folding};
use crate::engine::state::RunReport;
use rand::{Rng, RngCore};
use tracing::{debug, instrument, trace};

/// Simulated annealing with geometric cooling. Each iteration proposes one
/// random single-position mutation; non-worsening moves are always taken,
/// worsening moves with probability exp(-delta / T). The best folding ever
/// evaluated is tracked independently of what the walk accepts.
#[derive(Debug)]
pub struct SimulatedAnnealing {
    sequence: Sequence,
    params: ContactParams,
    config: AnnealingConfig,
}

impl SimulatedAnnealing {
    pub fn new(sequence: Sequence, params: ContactParams, config: AnnealingConfig) -> Self {
        Self {
            sequence,
            params,
            config,
        }
    }

    fn anneal(
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

        if current.is_empty() {
            // Nothing to mutate for chains of one bond or fewer.
            return true;
        }

        let mut temperature = self.config.initial_temperature;
        let cooling = 1.0 - self.config.cooling_rate;

        for _ in 0..self.config.max_iterations {
            let candidate = random_mutation(&current, rng);
            let score = match evaluator.evaluate(&candidate) {
                Ok(score) => score,
                Err(_) => {
                    // Self-intersecting proposal: skip it. Whether the
                    // schedule still cools here is a policy knob.
                    if self.config.cool_on_invalid {
                        temperature *= cooling;
                    }
                    continue;
                }
            };
            report.record(&candidate, score);

            let delta = f64::from(score - current_score);
            if delta <= 0.0 || rng.gen_range(0.0..1.0) < (-delta / temperature).exp() {
                current = candidate;
                current_score = score;
            }
            temperature *= cooling;
        }

        trace!(
            final_temperature = temperature,
            score = current_score,
            "Annealing walk finished."
        );
        true
    }
}

impl SearchStrategy for SimulatedAnnealing {
    fn name(&self) -> &'static str {
        "SimulatedAnnealing"
    }

    #[instrument(level = "debug", skip_all, name = "annealing_unit")]
    fn run_unit(&mut self, rng: &mut dyn RngCore) -> Result<RunReport, EngineError> {
        let evaluator = Evaluator::new(&self.sequence, &self.params);
        let mut report = RunReport::default();

        for restart in 0..self.config.restarts {
            if !self.anneal(&evaluator, &mut report, rng) {
                debug!(restart, "No valid starting folding found; restart skipped.");
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strategy(sequence: &str, config: AnnealingConfig) -> SimulatedAnnealing {
        SimulatedAnnealing::new(sequence.parse().unwrap(), ContactParams::default(), config)
    }

    fn quick_config() -> AnnealingConfig {
        AnnealingConfig {
            max_iterations: 500,
            ..AnnealingConfig::default()
        }
    }

    #[test]
    fn best_score_bounds_every_observed_score() {
        let mut strategy = strategy("HHPHHPHHCH", quick_config());
        let mut rng = StdRng::seed_from_u64(31);
        let report = strategy.run_unit(&mut rng).unwrap();

        let best = report.best.unwrap().score;
        assert!(!report.observed_scores.is_empty());
        assert!(report.observed_scores.iter().all(|&s| best <= s));
    }

    #[test]
    fn reported_best_folding_rescoring_matches() {
        let mut strategy = strategy("HHPHHPHH", quick_config());
        let mut rng = StdRng::seed_from_u64(32);
        let report = strategy.run_unit(&mut rng).unwrap();

        let best = report.best.unwrap();
        let sequence: Sequence = "HHPHHPHH".parse().unwrap();
        let params = ContactParams::default();
        let evaluator = Evaluator::new(&sequence, &params);
        assert_eq!(evaluator.evaluate(&best.folding), Ok(best.score));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let report_a = strategy("HCPHPHHP", quick_config())
            .run_unit(&mut StdRng::seed_from_u64(33))
            .unwrap();
        let report_b = strategy("HCPHPHHP", quick_config())
            .run_unit(&mut StdRng::seed_from_u64(33))
            .unwrap();
        assert_eq!(report_a, report_b);
    }

    #[test]
    fn singleton_chain_returns_after_the_start() {
        let mut strategy = strategy("H", quick_config());
        let mut rng = StdRng::seed_from_u64(34);
        let report = strategy.run_unit(&mut rng).unwrap();
        assert_eq!(report.observed_scores, vec![0]);
        assert_eq!(report.best.unwrap().score, 0);
    }
}
