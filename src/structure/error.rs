// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout {0} declares no fields")]
    Empty(String),
    #[error("Duplicate field {field} in {layout}")]
    DuplicateField { layout: String, field: String },
    #[error("Field {field} partially overlaps {other} in {layout}")]
    Overlap {
        layout: String,
        field: String,
        other: String,
    },
    #[error("Field {field} at offset {offset} is not aligned to {alignment}")]
    Misaligned {
        field: String,
        offset: usize,
        alignment: usize,
    },
    #[error("Field {field} ends at {end}, beyond the declared size {size}")]
    BeyondSize { field: String, end: usize, size: usize },
    #[error("Union alternative {field} must start at offset 0, not {offset}")]
    UnionOffset { field: String, offset: usize },
    #[error("Field {0} has zero length")]
    ZeroLength(String),
    #[error("Size or offset of {0} overflows the address space")]
    Overflow(String),
    #[error("Invalid alignment: {0}")]
    InvalidAlignment(usize),
    #[error("Field not found: {0}")]
    FieldNotFound(String),
    #[error("Field {0} is not a nested structure")]
    NotNested(String),
}
