// Thu Jan 15 2026 - Alex

use crate::memory::{Address, AddressSpace, MemoryRegion};
use crate::structure::StructLayout;
use crate::view::{StructView, ViewError};
use std::sync::Arc;

/// Produces views of one layout over caller-supplied memory.
#[derive(Debug, Clone)]
pub struct StructMapper {
    layout: Arc<StructLayout>,
}

impl StructMapper {
    pub fn new(layout: Arc<StructLayout>) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Arc<StructLayout> {
        &self.layout
    }

    /// Binds the layout to the first `layout.size()` bytes of `region`.
    pub fn of(&self, region: MemoryRegion) -> Result<StructView, ViewError> {
        let required = self.layout.size();
        if region.len() < required {
            return Err(ViewError::RegionTooSmall {
                layout: self.layout.name().to_string(),
                required,
                actual: region.len(),
            });
        }
        let region = region.slice(0, required)?;
        log::trace!("mapped {} at {}", self.layout.name(), region.address());
        Ok(StructView::from_parts(Arc::clone(&self.layout), region))
    }

    /// Maps the structure found at `address`; the null address yields `None`.
    pub fn of_address(&self, space: &AddressSpace, address: Address) -> Result<Option<StructView>, ViewError> {
        match space.resolve(address, self.layout.size())? {
            Some(region) => self.of(region).map(Some),
            None => Ok(None),
        }
    }

    /// A view over a new zero-filled heap region owned by the returned view.
    pub fn allocate(&self) -> StructView {
        let region = MemoryRegion::allocate(self.layout.size());
        StructView::from_parts(Arc::clone(&self.layout), region)
    }

    /// Views of `count` consecutive elements, like a C array of this struct.
    pub fn elements(&self, region: &MemoryRegion, count: usize) -> Result<Vec<StructView>, ViewError> {
        let stride = self.layout.size();
        (0..count)
            .map(|i| {
                let element = region.slice(i * stride, stride)?;
                self.of(element)
            })
            .collect()
    }
}
