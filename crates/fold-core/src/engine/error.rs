use super::config::ConfigError;
use crate::core::energy::params::ParamLoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid search configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Energy parameter loading failed: {source}")]
    Params {
        #[from]
        source: ParamLoadError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
