// Tue Jan 13 2026 - Alex

use crate::memory::storage::check_range;
use crate::memory::{Address, MemoryError, Storage};
use memmap2::{Mmap, MmapMut, MmapOptions};
use parking_lot::RwLock;
use std::fs::{File, OpenOptions};
use std::path::Path;

enum Mapping {
    ReadOnly(Mmap),
    ReadWrite(MmapMut),
}

impl Mapping {
    fn bytes(&self) -> &[u8] {
        match self {
            Self::ReadOnly(m) => m.as_ref(),
            Self::ReadWrite(m) => m.as_ref(),
        }
    }
}

/// Storage backed by a memory map, either of a file or anonymous.
pub struct MmapStorage {
    map: RwLock<Mapping>,
    base: Address,
    len: usize,
}

impl MmapStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let file = File::open(path)?;
        // SAFETY: the file is not expected to be truncated while mapped.
        let map = unsafe { Mmap::map(&file) }?;
        Ok(Self::from_mapping(Mapping::ReadOnly(map)))
    }

    pub fn open_mut<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        // SAFETY: as above.
        let map = unsafe { MmapMut::map_mut(&file) }?;
        Ok(Self::from_mapping(Mapping::ReadWrite(map)))
    }

    pub fn anonymous(len: usize) -> Result<Self, MemoryError> {
        let map = MmapOptions::new().len(len).map_anon()?;
        Ok(Self::from_mapping(Mapping::ReadWrite(map)))
    }

    fn from_mapping(map: Mapping) -> Self {
        let bytes = map.bytes();
        let base = Address::from_ptr(bytes.as_ptr());
        let len = bytes.len();
        Self {
            map: RwLock::new(map),
            base,
            len,
        }
    }

    pub fn flush(&self) -> Result<(), MemoryError> {
        match &*self.map.read() {
            Mapping::ReadWrite(m) => m.flush().map_err(MemoryError::Io),
            Mapping::ReadOnly(_) => Ok(()),
        }
    }
}

impl Storage for MmapStorage {
    fn len(&self) -> usize {
        self.len
    }

    fn base_address(&self) -> Address {
        self.base
    }

    fn read_at(&self, offset: usize, buf: &mut [u8]) -> Result<(), MemoryError> {
        check_range(offset, buf.len(), self.len)?;
        let map = self.map.read();
        buf.copy_from_slice(&map.bytes()[offset..offset + buf.len()]);
        Ok(())
    }

    fn write_at(&self, offset: usize, data: &[u8]) -> Result<(), MemoryError> {
        check_range(offset, data.len(), self.len)?;
        match &mut *self.map.write() {
            Mapping::ReadWrite(m) => {
                m[offset..offset + data.len()].copy_from_slice(data);
                Ok(())
            }
            Mapping::ReadOnly(_) => Err(MemoryError::ReadOnly),
        }
    }

    fn is_read_only(&self) -> bool {
        matches!(&*self.map.read(), Mapping::ReadOnly(_))
    }
}
