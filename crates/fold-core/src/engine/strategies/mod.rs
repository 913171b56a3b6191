//! Search strategies over the folding space.
//!
//! Every strategy shares the same collaborators (the evaluator for
//! validity and scoring, the neighborhood module for candidate
//! generation) and differs only in acceptance policy and iteration
//! control. One [`SearchStrategy::run_unit`] call is one bounded unit of
//! work; callers that enforce a wall-clock budget cancel *between* units,
//! never inside one, so a unit's results are always complete.

pub mod annealing;
pub mod brute_force;
pub mod frame_search;
pub mod hill_climbing;
pub mod random_sampling;

use super::config::{AlgorithmConfig, SearchConfig};
use super::error::EngineError;
use super::state::RunReport;
use crate::core::models::residue::Sequence;
use rand::RngCore;

pub trait SearchStrategy: std::fmt::Debug {
    /// Stable algorithm name, as recorded in result files.
    fn name(&self) -> &'static str;

    /// Executes one bounded unit of work (one batch of samples, one set of
    /// restarts, one sweep). Candidate rejection is handled internally; a
    /// unit that finds nothing valid returns a report with `best: None`.
    fn run_unit(&mut self, rng: &mut dyn RngCore) -> Result<RunReport, EngineError>;
}

/// Builds the strategy selected by `config` for `sequence`.
pub fn build(
    sequence: &Sequence,
    config: &SearchConfig,
) -> Result<Box<dyn SearchStrategy>, EngineError> {
    config.algorithm.validate()?;
    let strategy: Box<dyn SearchStrategy> = match &config.algorithm {
        AlgorithmConfig::RandomSampling(c) => Box::new(random_sampling::RandomSampling::new(
            sequence.clone(),
            config.contact_params,
            c.clone(),
        )),
        AlgorithmConfig::HillClimbing(c) => Box::new(hill_climbing::HillClimbing::new(
            sequence.clone(),
            config.contact_params,
            c.clone(),
        )),
        AlgorithmConfig::SimulatedAnnealing(c) => Box::new(annealing::SimulatedAnnealing::new(
            sequence.clone(),
            config.contact_params,
            c.clone(),
        )),
        AlgorithmConfig::BruteForce(c) => Box::new(brute_force::BruteForce::new(
            sequence.clone(),
            config.contact_params,
            *c,
        )),
        AlgorithmConfig::FrameSearch(c) => Box::new(frame_search::FrameSearch::new(
            sequence.clone(),
            config.contact_params,
            c.clone(),
        )),
    };
    Ok(strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{
        AnnealingConfig, ConfigError, SearchConfigBuilder,
    };

    #[test]
    fn build_rejects_invalid_configuration() {
        let sequence: Sequence = "HPH".parse().unwrap();
        let config = SearchConfig {
            algorithm: AlgorithmConfig::SimulatedAnnealing(AnnealingConfig {
                initial_temperature: -1.0,
                ..AnnealingConfig::default()
            }),
            contact_params: Default::default(),
            seed: None,
        };
        let err = build(&sequence, &config).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Config {
                source: ConfigError::InvalidParameter { .. }
            }
        ));
    }

    #[test]
    fn build_reports_the_selected_algorithm_name() {
        let sequence: Sequence = "HPH".parse().unwrap();
        let config = SearchConfigBuilder::new()
            .algorithm(AlgorithmConfig::BruteForce(Default::default()))
            .build()
            .unwrap();
        let strategy = build(&sequence, &config).unwrap();
        assert_eq!(strategy.name(), "BruteForce");
    }
}
