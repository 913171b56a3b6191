use crate::core::models::residue::Sequence;
use crate::engine::config::SearchConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{RunReport, Solution};
use crate::engine::strategies;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};

/// Outcome of a single search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub algorithm: &'static str,
    pub best: Option<Solution>,
    pub observed_scores: Vec<i32>,
}

/// Runs one unit of the configured strategy over `sequence`.
///
/// This is the one-shot entry point; wall-clock-bounded repetition lives in
/// [`crate::workflows::experiment`].
#[instrument(skip_all, name = "search_workflow")]
pub fn run(
    sequence: &Sequence,
    config: &SearchConfig,
    reporter: &ProgressReporter,
) -> Result<SearchReport, EngineError> {
    reporter.report(Progress::PhaseStart { name: "Search" });

    let mut strategy = strategies::build(sequence, config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        algorithm = strategy.name(),
        sequence = %sequence,
        seed = ?config.seed,
        "Starting search run."
    );

    let RunReport {
        best,
        observed_scores,
    } = strategy.run_unit(&mut rng)?;

    match &best {
        Some(solution) => {
            info!(score = solution.score, "Search run finished.");
            reporter.report(Progress::Message(format!(
                "Best score: {} ({} foldings evaluated).",
                solution.score,
                observed_scores.len()
            )));
        }
        None => {
            info!("Search run finished without a valid folding.");
            reporter.report(Progress::Message("No valid folding found.".to_string()));
        }
    }
    reporter.report(Progress::PhaseFinish);

    Ok(SearchReport {
        algorithm: strategy.name(),
        best,
        observed_scores,
    })
}
