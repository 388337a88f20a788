use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("Unable to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bad assignment on line {line}:\n{report}")]
    BadLine { line: usize, report: String },
}
