use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("invalid sort key: '{0}' (expected \"width\" or \"length\")")]
    InvalidSortKey(String),

    #[error("invalid dimensions: width and length must both be greater than 0 (got {width}x{length})")]
    InvalidDimensions { width: f64, length: f64 },

    #[error("invalid strain: must be greater than 0 (got {0})")]
    InvalidStrain(f64),

    #[error("invalid part dimensions in thickness {thickness} priority {priority}, index {index}: width and length must both be greater than 0 (got {w}x{l})")]
    InvalidPartDimensions {
        thickness: f64,
        priority: u32,
        index: usize,
        w: f64,
        l: f64,
    },
}

pub type Result<T> = std::result::Result<T, PackError>;
