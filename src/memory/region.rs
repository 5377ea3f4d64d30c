// Tue Jan 13 2026 - Alex

use crate::memory::storage::check_range;
use crate::memory::{
    Address, ByteOrder, HeapStorage, MemoryError, MemoryRange, MemoryReader, MemoryWriter,
    NullStorage, RawStorage, Scalar, Storage,
};
use std::fmt;
use std::sync::Arc;

/// A bounds-checked window `[offset, offset + len)` over shared storage.
///
/// Cloning or slicing a region never copies bytes: every handle over the same
/// storage observes every write. The region does not own native memory it
/// was handed; the storage's creator decides its lifetime.
#[derive(Clone)]
pub struct MemoryRegion {
    storage: Arc<dyn Storage>,
    offset: usize,
    len: usize,
}

impl MemoryRegion {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let len = storage.len();
        Self {
            storage,
            offset: 0,
            len,
        }
    }

    /// A zero-filled heap region of `len` bytes.
    pub fn allocate(len: usize) -> Self {
        Self::new(Arc::new(HeapStorage::zeroed(len)))
    }

    /// A heap region initialized with a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(Arc::new(HeapStorage::from_vec(bytes.to_vec())))
    }

    /// # Safety
    ///
    /// See [`RawStorage::new`].
    pub unsafe fn from_raw_parts(ptr: *mut u8, len: usize) -> Result<Self, MemoryError> {
        Ok(Self::new(Arc::new(RawStorage::new(ptr, len)?)))
    }

    /// The empty region at the null address.
    pub fn null() -> Self {
        Self::new(Arc::new(NullStorage))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn address(&self) -> Address {
        let base = self.storage.base_address();
        if base.is_null() {
            return Address::NULL;
        }
        base + self.offset as u64
    }

    pub fn is_null(&self) -> bool {
        self.address().is_null()
    }

    pub fn is_read_only(&self) -> bool {
        self.storage.is_read_only()
    }

    pub fn range(&self) -> Option<MemoryRange> {
        MemoryRange::from_start_size(self.address(), self.len as u64)
    }

    /// True when both handles view the same bytes of the same storage.
    pub fn same_span(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage) && self.offset == other.offset && self.len == other.len
    }

    pub fn get<T: Scalar>(&self, offset: usize, order: ByteOrder) -> Result<T, MemoryError> {
        self.read(offset, order)
    }

    pub fn set<T: Scalar>(&self, offset: usize, value: T, order: ByteOrder) -> Result<(), MemoryError> {
        self.write(offset, value, order)
    }

    pub fn write_bytes(&self, offset: usize, data: &[u8]) -> Result<(), MemoryError> {
        self.write_from(offset, data)
    }

    /// A new handle over `[offset, offset + len)` of this region.
    pub fn slice(&self, offset: usize, len: usize) -> Result<Self, MemoryError> {
        if check_range(offset, len, self.len).is_err() {
            return Err(MemoryError::InvalidSlice {
                offset,
                len,
                size: self.len,
            });
        }
        Ok(Self {
            storage: Arc::clone(&self.storage),
            offset: self.offset + offset,
            len,
        })
    }

    pub fn slice_from(&self, offset: usize) -> Result<Self, MemoryError> {
        let len = self.len.checked_sub(offset).ok_or(MemoryError::InvalidSlice {
            offset,
            len: 0,
            size: self.len,
        })?;
        self.slice(offset, len)
    }

    pub fn fill(&self, value: u8) -> Result<(), MemoryError> {
        self.write_from(0, &vec![value; self.len])
    }

    /// Copies all of `src` to the start of this region.
    pub fn copy_from(&self, src: &MemoryRegion) -> Result<(), MemoryError> {
        if src.len > self.len {
            return Err(MemoryError::OutOfBounds {
                offset: 0,
                len: src.len,
                size: self.len,
            });
        }
        let bytes = src.to_vec()?;
        self.write_from(0, &bytes)
    }

    /// Snapshot of the region's bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>, MemoryError> {
        let mut buf = vec![0u8; self.len];
        self.storage.read_at(self.offset, &mut buf)?;
        Ok(buf)
    }

    /// Offset of the first differing byte, or `None` when the regions have the
    /// same length and contents. A strict prefix mismatches at the shorter
    /// length.
    pub fn mismatch(&self, other: &MemoryRegion) -> Result<Option<usize>, MemoryError> {
        let a = self.to_vec()?;
        let b = other.to_vec()?;
        if let Some(pos) = a.iter().zip(b.iter()).position(|(x, y)| x != y) {
            return Ok(Some(pos));
        }
        if a.len() == b.len() {
            Ok(None)
        } else {
            Ok(Some(a.len().min(b.len())))
        }
    }

    /// Byte-wise equality. Unreadable regions are unequal to everything but
    /// their own span.
    pub fn content_eq(&self, other: &MemoryRegion) -> bool {
        self.same_span(other) || matches!(self.mismatch(other), Ok(None))
    }

    /// Reads a NUL-terminated UTF-8 string starting at `offset`.
    pub fn get_c_string(&self, offset: usize) -> Result<String, MemoryError> {
        let tail = self.slice_from(offset)?.to_vec()?;
        let end = tail.iter().position(|&b| b == 0).ok_or(MemoryError::Unterminated(offset))?;
        String::from_utf8(tail[..end].to_vec()).map_err(|_| MemoryError::Utf8(offset))
    }

    /// Writes `s` followed by a NUL terminator at `offset`.
    pub fn set_c_string(&self, offset: usize, s: &str) -> Result<(), MemoryError> {
        let mut bytes = Vec::with_capacity(s.len() + 1);
        bytes.extend_from_slice(s.as_bytes());
        bytes.push(0);
        self.write_from(offset, &bytes)
    }

    pub fn get_ptr(&self, offset: usize) -> Result<Address, MemoryError> {
        self.read_ptr(offset)
    }

    pub fn set_ptr(&self, offset: usize, value: Address) -> Result<(), MemoryError> {
        self.write_ptr(offset, value)
    }
}

impl MemoryReader for MemoryRegion {
    fn size(&self) -> usize {
        self.len
    }

    fn read_into(&self, offset: usize, buf: &mut [u8]) -> Result<(), MemoryError> {
        check_range(offset, buf.len(), self.len)?;
        self.storage.read_at(self.offset + offset, buf)
    }
}

impl MemoryWriter for MemoryRegion {
    fn write_from(&self, offset: usize, data: &[u8]) -> Result<(), MemoryError> {
        check_range(offset, data.len(), self.len)?;
        self.storage.write_at(self.offset + offset, data)
    }
}

impl fmt::Debug for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryRegion")
            .field("address", &format_args!("{}", self.address()))
            .field("len", &self.len)
            .finish()
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} bytes)", self.address(), self.len)
    }
}
