use crate::cli::{AlgorithmArg, RunArgs};
use crate::error::{CliError, Result};
use hpfold::core::energy::params::ContactParams;
use hpfold::engine::config::{
    AlgorithmConfig, FrameSearchConfig, SearchConfig, SearchConfigBuilder,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Shape of the TOML configuration file. Every table is optional; the
/// command line fills in or overrides what matters per invocation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FileConfig {
    pub seed: Option<u64>,
    pub time_budget_seconds: Option<f64>,
    pub energy_params: Option<PathBuf>,
    pub contact_params: Option<ContactParams>,
    pub algorithm: Option<AlgorithmConfig>,
}

pub fn load(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(CliError::Io)?;
    toml::from_str(&content).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: anyhow::Error::from(e),
    })
}

/// A run command's fully-merged configuration.
#[derive(Debug)]
pub struct ResolvedRun {
    pub search: SearchConfig,
    pub time_budget: Option<Duration>,
}

fn default_algorithm(arg: AlgorithmArg) -> AlgorithmConfig {
    match arg {
        AlgorithmArg::RandomSampling => AlgorithmConfig::RandomSampling(Default::default()),
        AlgorithmArg::HillClimbing => AlgorithmConfig::HillClimbing(Default::default()),
        AlgorithmArg::SimulatedAnnealing => AlgorithmConfig::SimulatedAnnealing(Default::default()),
        AlgorithmArg::BruteForce => AlgorithmConfig::BruteForce(Default::default()),
        AlgorithmArg::BreadthFirst => AlgorithmConfig::FrameSearch(FrameSearchConfig::breadth()),
        AlgorithmArg::DepthFirst => AlgorithmConfig::FrameSearch(FrameSearchConfig::depth()),
    }
}

/// Merges the command line with the optional config file. Precedence is
/// command line, then file, then defaults.
pub fn resolve(args: &RunArgs) -> Result<ResolvedRun> {
    let file = match &args.config {
        Some(path) => load(path)?,
        None => FileConfig::default(),
    };

    let algorithm = match (args.algorithm, file.algorithm) {
        (Some(arg), from_file) => {
            if from_file.is_some() {
                warn!("--algorithm overrides the config file's algorithm table.");
            }
            default_algorithm(arg)
        }
        (None, Some(config)) => config,
        (None, None) => AlgorithmConfig::RandomSampling(Default::default()),
    };

    let contact_params = match args.energy_params.as_deref().or(file.energy_params.as_deref()) {
        Some(path) => ContactParams::load(path)?,
        None => file.contact_params.unwrap_or_default(),
    };

    let mut builder = SearchConfigBuilder::new()
        .algorithm(algorithm)
        .contact_params(contact_params);
    if let Some(seed) = args.seed.or(file.seed) {
        builder = builder.seed(seed);
    }
    let search = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let time_budget = match args.time_budget.or(file.time_budget_seconds) {
        Some(seconds) => {
            if !seconds.is_finite() || seconds < 0.0 {
                return Err(CliError::Argument(format!(
                    "time budget must be a non-negative number of seconds, got {seconds}"
                )));
            }
            Some(Duration::from_secs_f64(seconds))
        }
        None => None,
    };

    Ok(ResolvedRun {
        search,
        time_budget,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(sequence: &str) -> RunArgs {
        RunArgs {
            sequence: sequence.to_string(),
            config: None,
            algorithm: None,
            time_budget: None,
            seed: None,
            energy_params: None,
            output: None,
            best_output: None,
        }
    }

    #[test]
    fn defaults_to_random_sampling() {
        let resolved = resolve(&args("HPH")).unwrap();
        assert!(matches!(
            resolved.search.algorithm,
            AlgorithmConfig::RandomSampling(_)
        ));
        assert!(resolved.time_budget.is_none());
    }

    #[test]
    fn file_settings_are_picked_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            seed = 11
            time-budget-seconds = 2.5

            [algorithm]
            algorithm = "hill-climbing"
            max-iterations = 50

            [contact-params]
            cysteine-cysteine = -7
            "#,
        )
        .unwrap();

        let mut args = args("HPH");
        args.config = Some(path);
        let resolved = resolve(&args).unwrap();

        assert_eq!(resolved.search.seed, Some(11));
        assert_eq!(resolved.time_budget, Some(Duration::from_secs_f64(2.5)));
        assert_eq!(resolved.search.contact_params.cysteine_cysteine, -7);
        match resolved.search.algorithm {
            AlgorithmConfig::HillClimbing(c) => assert_eq!(c.max_iterations, 50),
            other => panic!("unexpected algorithm: {:?}", other),
        }
    }

    #[test]
    fn command_line_overrides_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            seed = 11

            [algorithm]
            algorithm = "hill-climbing"
            "#,
        )
        .unwrap();

        let mut args = args("HPH");
        args.config = Some(path);
        args.seed = Some(99);
        args.algorithm = Some(AlgorithmArg::BruteForce);
        let resolved = resolve(&args).unwrap();

        assert_eq!(resolved.search.seed, Some(99));
        assert!(matches!(
            resolved.search.algorithm,
            AlgorithmConfig::BruteForce(_)
        ));
    }

    #[test]
    fn negative_time_budget_is_rejected() {
        let mut args = args("HPH");
        args.time_budget = Some(-1.0);
        assert!(matches!(
            resolve(&args),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn malformed_config_file_reports_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "algorithm = {{{{").unwrap();

        let mut args = args("HPH");
        args.config = Some(path.clone());
        match resolve(&args) {
            Err(CliError::FileParsing { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
