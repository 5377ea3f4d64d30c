// Tue Jan 13 2026 - Alex

pub mod address;
pub mod error;
pub mod mapping;
pub mod mmap;
pub mod order;
pub mod range;
pub mod region;
pub mod storage;
pub mod traits;

pub use address::Address;
pub use error::MemoryError;
pub use mapping::AddressSpace;
pub use mmap::MmapStorage;
pub use order::{ByteOrder, Scalar, ScalarKind};
pub use range::MemoryRange;
pub use region::MemoryRegion;
pub use storage::{HeapStorage, NullStorage, RawStorage, Storage};
pub use traits::{MemoryReader, MemoryWriter};
