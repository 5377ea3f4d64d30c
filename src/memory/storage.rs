// Wed Jan 14 2026 - Alex

use crate::memory::{Address, MemoryError};
use parking_lot::RwLock;
use std::ptr::NonNull;

/// Backing bytes for one or more regions.
///
/// Implementations copy in and out of their storage; they never hand out
/// references into it. Every call is bounds checked against `len()`.
pub trait Storage: Send + Sync {
    fn len(&self) -> usize;

    fn base_address(&self) -> Address;

    fn read_at(&self, offset: usize, buf: &mut [u8]) -> Result<(), MemoryError>;

    fn write_at(&self, offset: usize, data: &[u8]) -> Result<(), MemoryError>;

    fn is_read_only(&self) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn check_range(offset: usize, len: usize, size: usize) -> Result<(), MemoryError> {
    match offset.checked_add(len) {
        Some(end) if end <= size => Ok(()),
        _ => Err(MemoryError::OutOfBounds { offset, len, size }),
    }
}

/// Zero-initialized storage owned by the process heap.
pub struct HeapStorage {
    data: RwLock<Box<[u8]>>,
    base: Address,
}

impl HeapStorage {
    pub fn zeroed(len: usize) -> Self {
        Self::from_vec(vec![0u8; len])
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        let data = data.into_boxed_slice();
        let base = Address::from_ptr(data.as_ptr());
        Self {
            data: RwLock::new(data),
            base,
        }
    }
}

impl Storage for HeapStorage {
    fn len(&self) -> usize {
        self.data.read().len()
    }

    fn base_address(&self) -> Address {
        self.base
    }

    fn read_at(&self, offset: usize, buf: &mut [u8]) -> Result<(), MemoryError> {
        let data = self.data.read();
        check_range(offset, buf.len(), data.len())?;
        buf.copy_from_slice(&data[offset..offset + buf.len()]);
        Ok(())
    }

    fn write_at(&self, offset: usize, bytes: &[u8]) -> Result<(), MemoryError> {
        let mut data = self.data.write();
        check_range(offset, bytes.len(), data.len())?;
        data[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }
}

/// Storage over native memory owned by someone else (an arena, a kernel
/// buffer, a struct handed over FFI). Accesses are unsynchronized.
pub struct RawStorage {
    ptr: Option<NonNull<u8>>,
    len: usize,
}

// SAFETY: the constructor's contract makes the caller responsible for the
// lifetime of the memory and for synchronizing concurrent access to it.
unsafe impl Send for RawStorage {}
unsafe impl Sync for RawStorage {}

impl RawStorage {
    /// Wraps `len` bytes starting at `ptr`. A null pointer is only accepted
    /// for an empty span.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of `len` bytes for as long as
    /// this storage (and every region created over it) is used.
    pub unsafe fn new(ptr: *mut u8, len: usize) -> Result<Self, MemoryError> {
        match NonNull::new(ptr) {
            Some(ptr) => Ok(Self { ptr: Some(ptr), len }),
            None if len == 0 => Ok(Self { ptr: None, len: 0 }),
            None => Err(MemoryError::NullPointer(len)),
        }
    }
}

impl Storage for RawStorage {
    fn len(&self) -> usize {
        self.len
    }

    fn base_address(&self) -> Address {
        self.ptr
            .map(|p| Address::from_ptr(p.as_ptr()))
            .unwrap_or(Address::NULL)
    }

    fn read_at(&self, offset: usize, buf: &mut [u8]) -> Result<(), MemoryError> {
        check_range(offset, buf.len(), self.len)?;
        if let Some(ptr) = self.ptr {
            // SAFETY: in bounds per the check above and the constructor contract.
            unsafe {
                std::ptr::copy_nonoverlapping(ptr.as_ptr().add(offset), buf.as_mut_ptr(), buf.len());
            }
        }
        Ok(())
    }

    fn write_at(&self, offset: usize, data: &[u8]) -> Result<(), MemoryError> {
        check_range(offset, data.len(), self.len)?;
        if let Some(ptr) = self.ptr {
            // SAFETY: in bounds per the check above and the constructor contract.
            unsafe {
                std::ptr::copy_nonoverlapping(data.as_ptr(), ptr.as_ptr().add(offset), data.len());
            }
        }
        Ok(())
    }
}

/// The zero-length storage at the null address.
pub struct NullStorage;

impl Storage for NullStorage {
    fn len(&self) -> usize {
        0
    }

    fn base_address(&self) -> Address {
        Address::NULL
    }

    fn read_at(&self, offset: usize, buf: &mut [u8]) -> Result<(), MemoryError> {
        check_range(offset, buf.len(), 0)
    }

    fn write_at(&self, offset: usize, data: &[u8]) -> Result<(), MemoryError> {
        check_range(offset, data.len(), 0)
    }

    fn is_read_only(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_storage_bounds() {
        let storage = HeapStorage::zeroed(8);
        storage.write_at(4, &[1, 2, 3, 4]).unwrap();

        let mut buf = [0u8; 4];
        storage.read_at(4, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);

        let err = storage.write_at(6, &[0, 0, 0]).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert!(storage.read_at(usize::MAX, &mut buf).is_err());
    }

    #[test]
    fn test_raw_storage_over_local_buffer() {
        let mut backing = [0u8; 16];
        let storage = unsafe { RawStorage::new(backing.as_mut_ptr(), backing.len()) }.unwrap();
        assert_eq!(storage.base_address(), Address::from_ptr(backing.as_ptr()));

        storage.write_at(0, &[0xAA; 4]).unwrap();
        assert!(storage.write_at(14, &[0; 4]).is_err());
        drop(storage);
        assert_eq!(&backing[..5], &[0xAA, 0xAA, 0xAA, 0xAA, 0]);
    }

    #[test]
    fn test_raw_storage_rejects_null() {
        let err = unsafe { RawStorage::new(std::ptr::null_mut(), 4) };
        assert!(matches!(err, Err(MemoryError::NullPointer(4))));

        let empty = unsafe { RawStorage::new(std::ptr::null_mut(), 0) }.unwrap();
        assert!(empty.base_address().is_null());
    }

    #[test]
    fn test_null_storage() {
        let storage = NullStorage;
        assert!(storage.is_empty());
        assert!(storage.base_address().is_null());
        assert!(storage.read_at(0, &mut [0u8; 1]).is_err());
        assert!(storage.read_at(0, &mut []).is_ok());
    }
}
