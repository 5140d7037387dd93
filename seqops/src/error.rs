use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    #[error("value at index {index} is not positive")]
    NonPositive { index: usize },

    #[error("lcm overflowed while merging value at index {index}")]
    Overflow { index: usize },
}
