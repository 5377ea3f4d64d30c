// Thu Jan 15 2026 - Alex

use crate::memory::{Address, MemoryRegion, MemoryWriter};
use crate::view::{StructView, ViewError};
use std::sync::Arc;

/// Anything backed by a struct view.
pub trait HasView {
    fn view(&self) -> &StructView;

    fn region(&self) -> &MemoryRegion {
        self.view().region()
    }

    fn address(&self) -> Address {
        self.view().address()
    }

    fn to_bytes(&self) -> Result<Vec<u8>, ViewError> {
        self.view().to_bytes()
    }
}

/// Overwrites this structure's memory from `src`.
pub trait CopyFrom<T: ?Sized> {
    fn copy_from(&self, src: &T) -> Result<(), ViewError>;
}

impl HasView for StructView {
    fn view(&self) -> &StructView {
        self
    }
}

impl CopyFrom<StructView> for StructView {
    fn copy_from(&self, src: &StructView) -> Result<(), ViewError> {
        if !Arc::ptr_eq(self.layout(), src.layout()) && self.layout() != src.layout() {
            return Err(ViewError::InvalidArgument(format!(
                "cannot copy {} into {}",
                src.layout().name(),
                self.layout().name()
            )));
        }
        let bytes = src.to_bytes()?;
        self.region().write_from(0, &bytes)?;
        Ok(())
    }
}

impl CopyFrom<[u8]> for StructView {
    fn copy_from(&self, src: &[u8]) -> Result<(), ViewError> {
        if src.len() != self.size() {
            return Err(ViewError::InvalidArgument(format!(
                "{}: length must be {}, got {}",
                self.layout().name(),
                self.size(),
                src.len()
            )));
        }
        self.region().write_from(0, src)?;
        Ok(())
    }
}
