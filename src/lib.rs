// Tue Jan 15 2026 - Alex

//! Describe C structure layouts once and read or write them field by field
//! over bounds-checked memory, with ready-made `sockaddr_in`/`sockaddr_in6`
//! views.

pub mod config;
pub mod memory;
pub mod net;
pub mod structure;
pub mod ui;
pub mod utils;
pub mod view;

pub use config::Config;
pub use memory::{AddressSpace, ByteOrder, MemoryError, MemoryRegion};
pub use net::{AddressFamily, In6Addr, InetLayouts, SockAddr, SockAddrIn, SockAddrIn6};
pub use structure::{define_struct, define_union, FieldSpec, LayoutError, StructBuilder, StructLayout, UnionBuilder};
pub use view::{CopyFrom, HasView, StructMapper, StructView, ViewError};
