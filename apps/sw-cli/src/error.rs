//! CLI error type wrapping the library errors.

use sw_column::ColumnError;
use sw_project::ProjectError;
use sw_props::{PropsError, UnitError};
use sw_reactor::ReactorError;
use sw_vle::VleError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Props(#[from] PropsError),

    #[error("{0}")]
    Units(#[from] UnitError),

    #[error("{0}")]
    Vle(#[from] VleError),

    #[error("{0}")]
    Column(#[from] ColumnError),

    #[error("{0}")]
    Reactor(#[from] ReactorError),

    #[error("Case file: {0}")]
    Project(#[from] ProjectError),

    #[error("JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
