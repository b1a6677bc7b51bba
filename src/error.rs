use thiserror::Error;

pub type ViewResult<T> = Result<T, ViewError>;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to load dataset: {0}")]
    Load(#[from] LoadError),
}

/// Fatal dataset load failures. None of these are retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{column}`")]
    MissingColumn { column: &'static str },

    #[error("row {row}: column `{column}` has non-numeric value `{value}`")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("dataset contains no records")]
    EmptyDataset,
}
