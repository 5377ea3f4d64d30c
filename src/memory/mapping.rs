// Tue Jan 13 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryRegion};
use std::collections::BTreeMap;

#[derive(Default)]
pub struct AddressSpace {
    regions: BTreeMap<u64, MemoryRegion>,
}

impl AddressSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(&mut self, region: MemoryRegion) -> Result<(), MemoryError> {
        let Some(range) = region.range() else {
            return Err(MemoryError::Unmapped(region.address().to_string()));
        };
        if region.is_null() || range.is_empty() {
            return Ok(());
        }
        if self.regions.values().filter_map(|r| r.range()).any(|r| r.overlaps(&range)) {
            return Err(MemoryError::OverlappingMapping(range.to_string()));
        }
        log::trace!("mapping {}", range);
        self.regions.insert(range.start().as_u64(), region);
        Ok(())
    }

    pub fn unmap(&mut self, start: Address) -> Option<MemoryRegion> {
        self.regions.remove(&start.as_u64())
    }

    pub fn find_region(&self, addr: Address) -> Option<&MemoryRegion> {
        self.regions
            .range(..=addr.as_u64())
            .next_back()
            .map(|(_, region)| region)
            .filter(|region| region.range().is_some_and(|r| r.contains(addr)))
    }

    // The null address is no value, not an error.
    pub fn resolve(&self, addr: Address, len: usize) -> Result<Option<MemoryRegion>, MemoryError> {
        if addr.is_null() {
            return Ok(None);
        }
        let region = self
            .find_region(addr)
            .ok_or_else(|| MemoryError::Unmapped(addr.to_string()))?;
        let offset = (addr - region.address()) as usize;
        region.slice(offset, len).map(Some)
    }

    pub fn regions(&self) -> impl Iterator<Item = &MemoryRegion> {
        self.regions.values()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
