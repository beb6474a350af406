//! FILENAME: export/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export produced non-UTF-8 output: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
