use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a pipeline stage. Each variant carries enough
/// context to be shown to the operator as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("cannot read {}: {reason}", .path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    #[error("{table} needs at least {required} columns ({columns}), found {found}")]
    SchemaTooNarrow {
        table: String,
        required: usize,
        found: usize,
        columns: String,
    },

    #[error("{table}: no value in column '{column}' could be converted to a number")]
    AllValuesUnparseable { table: String, column: String },
}

impl PipelineError {
    /// Short label for the error kind, used in log lines and the UI header.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::SourceUnreadable { .. } => "source unreadable",
            PipelineError::SchemaTooNarrow { .. } => "schema too narrow",
            PipelineError::AllValuesUnparseable { .. } => "all values unparseable",
        }
    }
}
