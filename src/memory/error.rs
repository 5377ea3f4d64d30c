// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Out of bounds: access of {len} bytes at offset {offset} exceeds region of {size} bytes")]
    OutOfBounds { offset: usize, len: usize, size: usize },
    #[error("Invalid slice: [{offset}, {offset}+{len}) not within region of {size} bytes")]
    InvalidSlice { offset: usize, len: usize, size: usize },
    #[error("Null pointer for non-empty storage of {0} bytes")]
    NullPointer(usize),
    #[error("Address {0} is not mapped")]
    Unmapped(String),
    #[error("Overlapping mapping at {0}")]
    OverlappingMapping(String),
    #[error("Invalid UTF-8 in string at offset {0}")]
    Utf8(usize),
    #[error("Unterminated string at offset {0}")]
    Unterminated(usize),
    #[error("Region is read-only")]
    ReadOnly,
}

impl MemoryError {
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::InvalidSlice { .. })
    }
}
