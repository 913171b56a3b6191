use crate::core::energy::params::ContactParams;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

fn invalid(name: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidParameter {
        name,
        reason: reason.into(),
    }
}

/// Pure random search: draw independent uniform foldings and keep the best.
/// One unit of work ends after `samples` *valid* foldings have been scored,
/// or after `max_attempts` draws in total.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RandomSamplingConfig {
    pub samples: usize,
    pub max_attempts: usize,
}

impl Default for RandomSamplingConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            max_attempts: 100_000,
        }
    }
}

impl RandomSamplingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(invalid("samples", "must be at least 1"));
        }
        if self.max_attempts < self.samples {
            return Err(invalid("max-attempts", "must not be below samples"));
        }
        Ok(())
    }
}

/// Steepest-descent hill climbing over the full single-position
/// neighborhood, with independent random restarts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HillClimbingConfig {
    pub max_iterations: usize,
    pub restarts: usize,
    pub max_start_attempts: usize,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            restarts: 1,
            max_start_attempts: 1_000,
        }
    }
}

impl HillClimbingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restarts == 0 {
            return Err(invalid("restarts", "must be at least 1"));
        }
        if self.max_start_attempts == 0 {
            return Err(invalid("max-start-attempts", "must be at least 1"));
        }
        Ok(())
    }
}

/// Simulated annealing with geometric cooling: each iteration proposes one
/// random single-position mutation and cools by `T <- T * (1 - cooling_rate)`.
///
/// `cool_on_invalid` controls whether iterations whose proposal
/// self-intersects still advance the temperature schedule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AnnealingConfig {
    pub max_iterations: usize,
    pub initial_temperature: f64,
    pub cooling_rate: f64,
    pub restarts: usize,
    pub cool_on_invalid: bool,
    pub max_start_attempts: usize,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            initial_temperature: 10.0,
            cooling_rate: 0.0012,
            restarts: 1,
            cool_on_invalid: true,
            max_start_attempts: 1_000,
        }
    }
}

impl AnnealingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.restarts == 0 {
            return Err(invalid("restarts", "must be at least 1"));
        }
        if self.max_start_attempts == 0 {
            return Err(invalid("max-start-attempts", "must be at least 1"));
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(invalid("initial-temperature", "must be positive"));
        }
        if !(0.0..1.0).contains(&self.cooling_rate) || self.cooling_rate == 0.0 {
            return Err(invalid("cooling-rate", "must be in (0, 1)"));
        }
        Ok(())
    }
}

/// Exhaustive enumeration of all 6^(N-1) foldings. A correctness oracle for
/// short sequences, never meant for production-size inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BruteForceConfig {}

impl BruteForceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameMode {
    /// The whole culled candidate pool survives into the next frame.
    Breadth,
    /// Stack-based single-path descent with backtracking; chunk sampling
    /// avoids reversing the immediately preceding step.
    Depth,
}

/// Frame-wise heuristic exploration for long sequences: bonds are split
/// into consecutive frames, each frame extends surviving prefixes with
/// randomly sampled chunks, and survivors are culled to the best
/// `keep` fraction of the per-frame sample budget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FrameSearchConfig {
    pub frame_size: usize,
    pub samples_per_frame: usize,
    pub keep: f64,
    pub mode: FrameMode,
    pub max_evaluations: usize,
}

impl Default for FrameSearchConfig {
    fn default() -> Self {
        Self::breadth()
    }
}

impl FrameSearchConfig {
    pub fn breadth() -> Self {
        Self {
            frame_size: 5,
            samples_per_frame: 500,
            keep: 0.005,
            mode: FrameMode::Breadth,
            max_evaluations: 200_000,
        }
    }

    pub fn depth() -> Self {
        Self {
            frame_size: 5,
            samples_per_frame: 120,
            keep: 0.025,
            mode: FrameMode::Depth,
            max_evaluations: 200_000,
        }
    }

    /// Number of survivors retained after each cull: the keep fraction of
    /// the per-frame sample budget, rounded down, but always at least one.
    pub(crate) fn cull_target(&self) -> usize {
        ((self.samples_per_frame as f64 * self.keep) as usize).max(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_size == 0 {
            return Err(invalid("frame-size", "must be at least 1"));
        }
        if self.samples_per_frame == 0 {
            return Err(invalid("samples-per-frame", "must be at least 1"));
        }
        if !(self.keep > 0.0 && self.keep <= 1.0) {
            return Err(invalid("keep", "must be in (0, 1]"));
        }
        if self.max_evaluations == 0 {
            return Err(invalid("max-evaluations", "must be at least 1"));
        }
        Ok(())
    }
}

/// Strategy selection plus its parameters; deserializes from the
/// `algorithm` table of a configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum AlgorithmConfig {
    RandomSampling(RandomSamplingConfig),
    HillClimbing(HillClimbingConfig),
    SimulatedAnnealing(AnnealingConfig),
    BruteForce(BruteForceConfig),
    FrameSearch(FrameSearchConfig),
}

impl AlgorithmConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            AlgorithmConfig::RandomSampling(c) => c.validate(),
            AlgorithmConfig::HillClimbing(c) => c.validate(),
            AlgorithmConfig::SimulatedAnnealing(c) => c.validate(),
            AlgorithmConfig::BruteForce(c) => c.validate(),
            AlgorithmConfig::FrameSearch(c) => c.validate(),
        }
    }
}

/// Everything a single search run needs besides the sequence itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub algorithm: AlgorithmConfig,
    pub contact_params: ContactParams,
    pub seed: Option<u64>,
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    algorithm: Option<AlgorithmConfig>,
    contact_params: Option<ContactParams>,
    seed: Option<u64>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn algorithm(mut self, algorithm: AlgorithmConfig) -> Self {
        self.algorithm = Some(algorithm);
        self
    }
    pub fn contact_params(mut self, params: ContactParams) -> Self {
        self.contact_params = Some(params);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let algorithm = self
            .algorithm
            .ok_or(ConfigError::MissingParameter("algorithm"))?;
        algorithm.validate()?;
        Ok(SearchConfig {
            algorithm,
            contact_params: self.contact_params.unwrap_or_default(),
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_an_algorithm() {
        let err = SearchConfigBuilder::new().build().unwrap_err();
        assert_eq!(err, ConfigError::MissingParameter("algorithm"));
    }

    #[test]
    fn builder_applies_defaults() {
        let config = SearchConfigBuilder::new()
            .algorithm(AlgorithmConfig::HillClimbing(HillClimbingConfig::default()))
            .seed(7)
            .build()
            .unwrap();
        assert_eq!(config.contact_params, ContactParams::default());
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn builder_rejects_invalid_strategy_parameters() {
        let annealing = AnnealingConfig {
            cooling_rate: 1.5,
            ..AnnealingConfig::default()
        };
        let err = SearchConfigBuilder::new()
            .algorithm(AlgorithmConfig::SimulatedAnnealing(annealing))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "cooling-rate",
                ..
            }
        ));
    }

    #[test]
    fn algorithm_config_deserializes_from_tagged_toml() {
        let config: AlgorithmConfig = toml::from_str(
            r#"
            algorithm = "simulated-annealing"
            max-iterations = 500
            initial-temperature = 5.0
            "#,
        )
        .unwrap();
        match config {
            AlgorithmConfig::SimulatedAnnealing(c) => {
                assert_eq!(c.max_iterations, 500);
                assert_eq!(c.initial_temperature, 5.0);
                assert_eq!(c.cooling_rate, 0.0012);
            }
            other => panic!("unexpected algorithm: {:?}", other),
        }
    }

    #[test]
    fn frame_search_cull_target_keeps_at_least_one() {
        let config = FrameSearchConfig {
            samples_per_frame: 10,
            keep: 0.001,
            ..FrameSearchConfig::breadth()
        };
        assert_eq!(config.cull_target(), 1);
        assert_eq!(FrameSearchConfig::breadth().cull_target(), 2);
        assert_eq!(FrameSearchConfig::depth().cull_target(), 3);
    }

    #[test]
    fn zero_frame_size_is_rejected() {
        let config = FrameSearchConfig {
            frame_size: 0,
            ..FrameSearchConfig::depth()
        };
        assert!(config.validate().is_err());
    }
}
