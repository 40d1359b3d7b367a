use protchar::core::chem::composition::AnalysisError;
use protchar::core::models::sequence::SequenceError;
use protchar::engine::aggregate::BatchError;
use protchar::workflows::export::ExportError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error("invalid sequence: {0}")]
    Sequence(#[from] SequenceError),

    #[error("invalid sequence in '{path}': {source}", path = path.display())]
    FileSequence {
        path: PathBuf,
        #[source]
        source: SequenceError,
    },

    #[error("invalid sequence in '{path}' on line {line}: {source}", path = path.display())]
    InputLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: SequenceError,
    },

    #[error("no sequences found in '{path}'", path = .0.display())]
    EmptyInput(PathBuf),

    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("failed to serialize descriptors: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
