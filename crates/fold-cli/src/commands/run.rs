use crate::cli::RunArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::progress;
use hpfold::core::io::folding::FoldingRecord;
use hpfold::core::io::report::ExperimentRecord;
use hpfold::core::models::residue::Sequence;
use hpfold::engine::state::Solution;
use hpfold::workflows::experiment::TimedExperiment;
use hpfold::workflows::search;
use std::time::Instant;
use tracing::info;

pub fn run(args: RunArgs, quiet: bool) -> Result<()> {
    let sequence: Sequence = args
        .sequence
        .parse()
        .map_err(|e| CliError::Argument(format!("{e}")))?;

    let resolved = config::resolve(&args)?;
    let reporter = progress::reporter(quiet);

    let (record, best) = match resolved.time_budget {
        Some(budget) => {
            let outcome = TimedExperiment::new(budget).run(&sequence, &resolved.search, &reporter)?;
            info!(units = outcome.units, "Experiment complete.");
            (outcome.record, outcome.best)
        }
        None => {
            let start = Instant::now();
            let report = search::run(&sequence, &resolved.search, &reporter)?;
            let record = ExperimentRecord {
                algorithm: report.algorithm.to_string(),
                sequence: sequence.to_string(),
                runtime_seconds: start.elapsed().as_secs_f64(),
                best_score: report.best.as_ref().map(|s| s.score),
                scores: report.observed_scores,
            };
            (record, report.best)
        }
    };

    if let Some(path) = &args.output {
        record.save(path)?;
        info!(path = %path.display(), "Results written.");
    }

    match &best {
        Some(Solution { folding, score }) => {
            println!("Best folding found:");
            println!("Folding: {:?}", folding.codes());
            println!("Score: {score}");
            if let Some(path) = &args.best_output {
                FoldingRecord::new(&sequence, folding, *score).save(path)?;
                info!(path = %path.display(), "Best folding record written.");
            }
        }
        None => {
            println!("No valid folding found within the configured budget.");
        }
    }

    Ok(())
}
