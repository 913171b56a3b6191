use crate::core::io::report::ExperimentRecord;
use crate::core::models::residue::Sequence;
use crate::engine::config::SearchConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{RunReport, Solution};
use crate::engine::strategies;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Aggregated outcome of a timed experiment: the tabular record plus the
/// best folding itself (the record only carries its score).
#[derive(Debug, Clone)]
pub struct ExperimentOutcome {
    pub record: ExperimentRecord,
    pub best: Option<Solution>,
    pub units: usize,
}

/// Wall-clock-bounded repetition driver.
///
/// Repeatedly invokes the configured strategy's `run_unit` until the time
/// budget is spent, aggregating the best solution and every observed score.
/// The deadline is only checked *between* units: a unit that started is
/// always allowed to finish and its results are kept, so cancellation can
/// never observe a half-mutated candidate.
#[derive(Debug, Clone, Copy)]
pub struct TimedExperiment {
    time_budget: Duration,
}

impl TimedExperiment {
    pub fn new(time_budget: Duration) -> Self {
        Self { time_budget }
    }

    #[instrument(skip_all, name = "experiment_workflow", fields(budget_s = self.time_budget.as_secs_f64()))]
    pub fn run(
        &self,
        sequence: &Sequence,
        config: &SearchConfig,
        reporter: &ProgressReporter,
    ) -> Result<ExperimentOutcome, EngineError> {
        reporter.report(Progress::PhaseStart { name: "Experiment" });

        let mut strategy = strategies::build(sequence, config)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            algorithm = strategy.name(),
            sequence = %sequence,
            "Starting timed experiment."
        );

        let start = Instant::now();
        let mut aggregate = RunReport::default();
        let mut units = 0;

        while start.elapsed() < self.time_budget {
            let unit_report = strategy.run_unit(&mut rng)?;
            units += 1;
            aggregate.merge(unit_report);

            let best_text = aggregate
                .best
                .as_ref()
                .map_or_else(|| "-".to_string(), |s| s.score.to_string());
            reporter.report(Progress::StatusUpdate {
                text: format!(
                    "Units: {}, solutions: {}, best: {}",
                    units,
                    aggregate.observed_scores.len(),
                    best_text
                ),
            });
        }

        let elapsed = start.elapsed();
        info!(
            units,
            solutions = aggregate.observed_scores.len(),
            best = ?aggregate.best.as_ref().map(|s| s.score),
            "Experiment finished."
        );
        reporter.report(Progress::PhaseFinish);

        let record = ExperimentRecord {
            algorithm: strategy.name().to_string(),
            sequence: sequence.to_string(),
            runtime_seconds: elapsed.as_secs_f64(),
            best_score: aggregate.best.as_ref().map(|s| s.score),
            scores: aggregate.observed_scores,
        };

        Ok(ExperimentOutcome {
            record,
            best: aggregate.best,
            units,
        })
    }
}
