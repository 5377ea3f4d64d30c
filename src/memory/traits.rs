// Wed Jan 15 2026 - Alex

use crate::memory::{Address, ByteOrder, MemoryError, Scalar};

/// Byte-level read capability over a bounded span.
pub trait MemoryReader {
    fn size(&self) -> usize;

    fn read_into(&self, offset: usize, buf: &mut [u8]) -> Result<(), MemoryError>;

    fn read_bytes(&self, offset: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        let mut buf = vec![0u8; len];
        self.read_into(offset, &mut buf)?;
        Ok(buf)
    }

    fn read<T: Scalar>(&self, offset: usize, order: ByteOrder) -> Result<T, MemoryError>
    where
        Self: Sized,
    {
        let mut raw = [0u8; 8];
        self.read_into(offset, &mut raw[..T::SIZE])?;
        Ok(T::decode(&raw[..T::SIZE], order))
    }

    fn read_u8(&self, offset: usize) -> Result<u8, MemoryError>
    where
        Self: Sized,
    {
        self.read(offset, ByteOrder::Native)
    }

    fn read_u16(&self, offset: usize, order: ByteOrder) -> Result<u16, MemoryError>
    where
        Self: Sized,
    {
        self.read(offset, order)
    }

    fn read_u32(&self, offset: usize, order: ByteOrder) -> Result<u32, MemoryError>
    where
        Self: Sized,
    {
        self.read(offset, order)
    }

    fn read_u64(&self, offset: usize, order: ByteOrder) -> Result<u64, MemoryError>
    where
        Self: Sized,
    {
        self.read(offset, order)
    }

    /// Reads one native pointer-width value.
    fn read_ptr(&self, offset: usize) -> Result<Address, MemoryError>
    where
        Self: Sized,
    {
        let value = if cfg!(target_pointer_width = "64") {
            self.read::<u64>(offset, ByteOrder::Native)?
        } else {
            self.read::<u32>(offset, ByteOrder::Native)? as u64
        };
        Ok(Address::new(value))
    }
}

/// Byte-level write capability. Writes go straight to shared storage, so
/// they take `&self`.
pub trait MemoryWriter {
    fn write_from(&self, offset: usize, data: &[u8]) -> Result<(), MemoryError>;

    fn write<T: Scalar>(&self, offset: usize, value: T, order: ByteOrder) -> Result<(), MemoryError>
    where
        Self: Sized,
    {
        let mut raw = [0u8; 8];
        value.encode(order, &mut raw[..T::SIZE]);
        self.write_from(offset, &raw[..T::SIZE])
    }

    fn write_u8(&self, offset: usize, value: u8) -> Result<(), MemoryError>
    where
        Self: Sized,
    {
        self.write(offset, value, ByteOrder::Native)
    }

    fn write_u16(&self, offset: usize, value: u16, order: ByteOrder) -> Result<(), MemoryError>
    where
        Self: Sized,
    {
        self.write(offset, value, order)
    }

    fn write_u32(&self, offset: usize, value: u32, order: ByteOrder) -> Result<(), MemoryError>
    where
        Self: Sized,
    {
        self.write(offset, value, order)
    }

    fn write_u64(&self, offset: usize, value: u64, order: ByteOrder) -> Result<(), MemoryError>
    where
        Self: Sized,
    {
        self.write(offset, value, order)
    }

    fn write_ptr(&self, offset: usize, value: Address) -> Result<(), MemoryError>
    where
        Self: Sized,
    {
        if cfg!(target_pointer_width = "64") {
            self.write(offset, value.as_u64(), ByteOrder::Native)
        } else {
            self.write(offset, value.as_u64() as u32, ByteOrder::Native)
        }
    }
}
