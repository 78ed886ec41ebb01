use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {parameter} = {value} (must lie in [0, 1])")]
    InvalidConfiguration { parameter: &'static str, value: f64 },

    #[error("Grid dimension mismatch: expected interior {expected:?}, got {found:?}")]
    DimensionMismatch {
        expected: [usize; 3],
        found: [usize; 3],
    },

    #[error("Padded shape {shape:?} leaves no interior cells")]
    DegenerateGrid { shape: [usize; 3] },

    #[error("Index {pos:?} is outside a padded grid of shape {shape:?}")]
    IndexOutOfBounds { pos: [usize; 3], shape: [usize; 3] },

    #[error("No boundary configured for species '{0}'")]
    UnknownSpecies(String),

    #[error("No series named '{0}' in results")]
    SeriesNotFound(String),

    #[error("Results contain a header but no recorded iterations")]
    EmptyResults,

    #[error("Parse float error at line {line}: '{value}'")]
    ParseFloat { line: u64, value: String },

    #[error("Invalid row at line {line}: expected {expected} columns, got {got}")]
    RaggedRow {
        line: u64,
        expected: usize,
        got: usize,
    },

    #[error("No entry '{0}' in archive")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
