// Thu Jan 15 2026 - Alex

use crate::memory::{MemoryError, ScalarKind};
use crate::structure::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Region of {actual} bytes is too small for {layout} ({required} bytes)")]
    RegionTooSmall {
        layout: String,
        required: usize,
        actual: usize,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Field {field} is declared as {declared}, not {requested:?}")]
    TypeMismatch {
        field: String,
        declared: String,
        requested: ScalarKind,
    },
    #[error("Field {0} is not a nested structure")]
    NotAStruct(String),
    #[error("Field {0} is not a pointer")]
    NotAPointer(String),
    #[error("Unsupported address family: {0}")]
    UnsupportedFamily(u8),
    #[error(transparent)]
    Memory(#[from] MemoryError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl ViewError {
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::Memory(e) if e.is_out_of_bounds())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
