use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffortError {
    #[error("grid has no rows")]
    NoRows,

    #[error("grid has no columns")]
    NoColumns,

    #[error("row {row} has {actual} columns, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{actual} samples can not fill a {rows}x{cols} grid")]
    SampleCount {
        rows: usize,
        cols: usize,
        actual: usize,
    },
}
