use thiserror::Error;

pub type DataResult<T> = Result<T, DataError>;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("unrecognized data shape: expected one of series, rows, columns, slices (found keys: {keys:?})")]
    UnrecognizedShape { keys: Vec<String> },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
