// Fri Jan 16 2026 - Alex

//! Socket address structures mapped over raw memory.

pub mod family;
pub mod in6_addr;
pub mod layouts;
pub mod sockaddr;
pub mod sockaddr_in;
pub mod sockaddr_in6;

pub use family::AddressFamily;
pub use in6_addr::In6Addr;
pub use layouts::InetLayouts;
pub use sockaddr::SockAddr;
pub use sockaddr_in::SockAddrIn;
pub use sockaddr_in6::SockAddrIn6;
