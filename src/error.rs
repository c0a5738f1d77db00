use crate::input;

use std::path::PathBuf;

/// Errors that stop a whole run. Failures of a single operation or record
/// never end up here, they're reported with the other results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No data found at {}", .0.display())]
    MissingInput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Input(#[from] input::Error),
}
