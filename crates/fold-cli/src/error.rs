use hpfold::core::energy::params::ParamLoadError;
use hpfold::core::io::folding::FoldingRecordError;
use hpfold::core::io::report::ReportError;
use hpfold::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to load energy parameters: {0}")]
    Params(#[from] ParamLoadError),

    #[error("Failed to write results file: {0}")]
    Report(#[from] ReportError),

    #[error("Failed to write folding record: {0}")]
    FoldingRecord(#[from] FoldingRecordError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
