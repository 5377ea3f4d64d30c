// Fri Jan 16 2026 - Alex

use crate::memory::{MemoryReader, MemoryRegion};
use crate::net::{AddressFamily, InetLayouts, SockAddrIn, SockAddrIn6};
use crate::view::{CopyFrom, HasView, StructView, ViewError};
use std::net::SocketAddr;

/// Offset of the family byte, shared by every BSD-style socket address.
const FAMILY_OFFSET: usize = 1;

/// A socket address of either family, chosen by its family byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SockAddr {
    V4(SockAddrIn),
    V6(SockAddrIn6),
}

impl SockAddr {
    pub fn from_region(layouts: &InetLayouts, region: MemoryRegion) -> Result<Self, ViewError> {
        let raw = region.read_u8(FAMILY_OFFSET)?;
        match AddressFamily::from_raw(raw) {
            AddressFamily::Inet => Ok(Self::V4(SockAddrIn::wrap(layouts, region)?)),
            AddressFamily::Inet6 => Ok(Self::V6(SockAddrIn6::wrap(layouts, region)?)),
            _ => Err(ViewError::UnsupportedFamily(raw)),
        }
    }

    /// Encodes `addr` into a new heap region of the matching size.
    pub fn encode(layouts: &InetLayouts, addr: &SocketAddr) -> Result<Self, ViewError> {
        match addr {
            SocketAddr::V4(v4) => {
                let view = SockAddrIn::allocate(layouts);
                view.copy_from(v4)?;
                Ok(Self::V4(view))
            }
            SocketAddr::V6(v6) => {
                let view = SockAddrIn6::allocate(layouts);
                view.copy_from(v6)?;
                Ok(Self::V6(view))
            }
        }
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            Self::V4(_) => AddressFamily::Inet,
            Self::V6(_) => AddressFamily::Inet6,
        }
    }

    pub fn to_socket_addr(&self) -> Result<SocketAddr, ViewError> {
        match self {
            Self::V4(addr) => Ok(SocketAddr::V4(addr.to_socket_addr()?)),
            Self::V6(addr) => Ok(SocketAddr::V6(addr.to_socket_addr()?)),
        }
    }
}

impl HasView for SockAddr {
    fn view(&self) -> &StructView {
        match self {
            Self::V4(addr) => addr.view(),
            Self::V6(addr) => addr.view(),
        }
    }
}
