// Fri Jan 16 2026 - Alex

use crate::memory::MemoryRegion;
use crate::net::{AddressFamily, InetLayouts};
use crate::view::{CopyFrom, HasView, StructMapper, StructView, ViewError};
use std::fmt;
use std::net::{Ipv4Addr, SocketAddrV4};

/// Typed view of a `sockaddr_in`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SockAddrIn {
    view: StructView,
}

impl SockAddrIn {
    pub fn wrap(layouts: &InetLayouts, region: MemoryRegion) -> Result<Self, ViewError> {
        let view = StructMapper::new(layouts.sockaddr_in().clone()).of(region)?;
        Ok(Self { view })
    }

    pub fn allocate(layouts: &InetLayouts) -> Self {
        Self {
            view: StructMapper::new(layouts.sockaddr_in().clone()).allocate(),
        }
    }

    pub fn len(&self) -> Result<u8, ViewError> {
        self.view.get("sin_len")
    }

    pub fn set_len(&self, len: u8) -> Result<(), ViewError> {
        self.view.set("sin_len", len)
    }

    pub fn family(&self) -> Result<AddressFamily, ViewError> {
        Ok(AddressFamily::from_raw(self.view.get("sin_family")?))
    }

    pub fn set_family(&self, family: AddressFamily) -> Result<(), ViewError> {
        self.view.set("sin_family", family.as_raw())
    }

    pub fn port(&self) -> Result<u16, ViewError> {
        self.view.get("sin_port")
    }

    pub fn set_port(&self, port: u16) -> Result<(), ViewError> {
        self.view.set("sin_port", port)
    }

    pub fn ip(&self) -> Result<Ipv4Addr, ViewError> {
        Ok(Ipv4Addr::from(self.view.get::<u32>("sin_addr")?))
    }

    pub fn set_ip(&self, ip: Ipv4Addr) -> Result<(), ViewError> {
        self.view.set("sin_addr", u32::from(ip))
    }

    pub fn to_socket_addr(&self) -> Result<SocketAddrV4, ViewError> {
        Ok(SocketAddrV4::new(self.ip()?, self.port()?))
    }
}

impl HasView for SockAddrIn {
    fn view(&self) -> &StructView {
        &self.view
    }
}

impl CopyFrom<SocketAddrV4> for SockAddrIn {
    fn copy_from(&self, src: &SocketAddrV4) -> Result<(), ViewError> {
        let staged = Self {
            view: StructMapper::new(self.view.layout().clone()).allocate(),
        };
        staged.set_len(staged.view.size() as u8)?;
        staged.set_family(AddressFamily::Inet)?;
        staged.set_port(src.port())?;
        staged.set_ip(*src.ip())?;
        self.view.copy_from(&staged.view)
    }
}

impl fmt::Debug for SockAddrIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view, f)
    }
}
