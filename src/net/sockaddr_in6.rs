// Fri Jan 16 2026 - Alex

use crate::memory::MemoryRegion;
use crate::net::{AddressFamily, In6Addr, InetLayouts};
use crate::view::{CopyFrom, HasView, StructMapper, StructView, ViewError};
use std::fmt;
use std::net::SocketAddrV6;

/// Typed view of a `sockaddr_in6`.
///
/// The port and flow info are read and written in the wire order the
/// layouts were built with, so the values seen here are host integers.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SockAddrIn6 {
    view: StructView,
}

impl SockAddrIn6 {
    pub fn wrap(layouts: &InetLayouts, region: MemoryRegion) -> Result<Self, ViewError> {
        let view = StructMapper::new(layouts.sockaddr_in6().clone()).of(region)?;
        Ok(Self { view })
    }

    /// A zeroed, heap-backed `sockaddr_in6`.
    pub fn allocate(layouts: &InetLayouts) -> Self {
        Self {
            view: StructMapper::new(layouts.sockaddr_in6().clone()).allocate(),
        }
    }

    pub fn len(&self) -> Result<u8, ViewError> {
        self.view.get("sin6_len")
    }

    pub fn set_len(&self, len: u8) -> Result<(), ViewError> {
        self.view.set("sin6_len", len)
    }

    pub fn family(&self) -> Result<AddressFamily, ViewError> {
        Ok(AddressFamily::from_raw(self.view.get("sin6_family")?))
    }

    pub fn set_family(&self, family: AddressFamily) -> Result<(), ViewError> {
        self.view.set("sin6_family", family.as_raw())
    }

    pub fn port(&self) -> Result<u16, ViewError> {
        self.view.get("sin6_port")
    }

    pub fn set_port(&self, port: u16) -> Result<(), ViewError> {
        self.view.set("sin6_port", port)
    }

    pub fn flowinfo(&self) -> Result<u32, ViewError> {
        self.view.get("sin6_flowinfo")
    }

    pub fn set_flowinfo(&self, flowinfo: u32) -> Result<(), ViewError> {
        self.view.set("sin6_flowinfo", flowinfo)
    }

    pub fn scope_id(&self) -> Result<u32, ViewError> {
        self.view.get("sin6_scope_id")
    }

    pub fn set_scope_id(&self, scope_id: u32) -> Result<(), ViewError> {
        self.view.set("sin6_scope_id", scope_id)
    }

    /// The embedded address, sharing this structure's memory. `None` only
    /// when this structure's own storage has no address.
    pub fn addr(&self) -> Result<Option<In6Addr>, ViewError> {
        Ok(self.view.nested("sin6_addr")?.map(In6Addr::from_view))
    }

    pub fn to_socket_addr(&self) -> Result<SocketAddrV6, ViewError> {
        let ip = match self.addr()? {
            Some(addr) => addr.to_ipv6()?,
            None => return Err(ViewError::InvalidArgument("sin6_addr is null".to_string())),
        };
        Ok(SocketAddrV6::new(ip, self.port()?, self.flowinfo()?, self.scope_id()?))
    }
}

impl HasView for SockAddrIn6 {
    fn view(&self) -> &StructView {
        &self.view
    }
}

impl CopyFrom<SocketAddrV6> for SockAddrIn6 {
    fn copy_from(&self, src: &SocketAddrV6) -> Result<(), ViewError> {
        let image = StructMapper::new(self.view.layout().clone()).allocate();
        let staged = SockAddrIn6 { view: image };
        staged.set_len(staged.view.size() as u8)?;
        staged.set_family(AddressFamily::Inet6)?;
        staged.set_port(src.port())?;
        staged.set_flowinfo(src.flowinfo())?;
        staged.set_scope_id(src.scope_id())?;
        if let Some(addr) = staged.addr()? {
            addr.copy_from(src.ip())?;
        }
        self.view.copy_from(&staged.view)
    }
}

impl fmt::Debug for SockAddrIn6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{ByteOrder, MemoryReader};
    use crate::view::StructView;
    use std::net::Ipv6Addr;

    fn sockaddr() -> (MemoryRegion, SockAddrIn6) {
        let layouts = InetLayouts::network().unwrap();
        let region = MemoryRegion::allocate(28);
        let addr = SockAddrIn6::wrap(&layouts, region.clone()).unwrap();
        (region, addr)
    }

    #[test]
    fn test_port_in_network_order() {
        let (region, addr) = sockaddr();
        addr.set_port(0x1F90).unwrap();

        assert_eq!(region.read_bytes(2, 2).unwrap(), vec![0x1F, 0x90]);
        assert_eq!(addr.port().unwrap(), 8080);
    }

    #[test]
    fn test_host_order_policy() {
        let layouts = InetLayouts::new(ByteOrder::Little).unwrap();
        let region = MemoryRegion::allocate(28);
        let addr = SockAddrIn6::wrap(&layouts, region.clone()).unwrap();
        addr.set_port(0x1F90).unwrap();
        assert_eq!(region.read_bytes(2, 2).unwrap(), vec![0x90, 0x1F]);
    }

    #[test]
    fn test_scalar_round_trips() {
        let (_, addr) = sockaddr();
        for value in [0u32, 1, 0x000F_FFFF, u32::MAX] {
            addr.set_flowinfo(value).unwrap();
            addr.set_scope_id(value).unwrap();
            assert_eq!(addr.flowinfo().unwrap(), value);
            assert_eq!(addr.scope_id().unwrap(), value);
        }
        for port in [0u16, 1, 443, u16::MAX] {
            addr.set_port(port).unwrap();
            assert_eq!(addr.port().unwrap(), port);
        }
        addr.set_family(AddressFamily::Inet6).unwrap();
        assert_eq!(addr.family().unwrap(), AddressFamily::Inet6);
    }

    #[test]
    fn test_nested_addr_shares_memory() {
        let (region, addr) = sockaddr();
        let inner = addr.addr().unwrap().unwrap();
        inner.set_bytes(&[0x11; 16]).unwrap();

        assert_eq!(region.read_bytes(8, 16).unwrap(), vec![0x11; 16]);
        assert_eq!(inner.address(), addr.address() + 8);
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_loopback_word_layout() {
        let (region, addr) = sockaddr();
        let inner = addr.addr().unwrap().unwrap();
        inner.set_ints(&[0, 0, 0, 0x0100007F]).unwrap();

        let bytes = inner.bytes().unwrap();
        assert_eq!(&bytes[12..], &[0x7F, 0x00, 0x00, 0x01]);
        assert_eq!(region.read_bytes(20, 4).unwrap(), vec![0x7F, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_socket_addr_conversion() {
        let (region, addr) = sockaddr();
        let src = SocketAddrV6::new(Ipv6Addr::LOCALHOST, 8080, 7, 3);
        addr.copy_from(&src).unwrap();

        assert_eq!(addr.len().unwrap(), 28);
        assert_eq!(addr.family().unwrap(), AddressFamily::Inet6);
        assert_eq!(addr.to_socket_addr().unwrap(), src);
        assert_eq!(region.read_bytes(23, 1).unwrap(), vec![1]);
    }

    #[test]
    fn test_matches_native_struct() {
        let (region, addr) = sockaddr();
        addr.copy_from(&SocketAddrV6::new("2001:db8::5".parse().unwrap(), 53, 0, 9))
            .unwrap();

        let bytes = region.to_vec().unwrap();
        // SAFETY: 28 initialized bytes, read unaligned into a plain C struct.
        let native: libc::sockaddr_in6 = unsafe { std::ptr::read_unaligned(bytes.as_ptr().cast()) };
        assert_eq!(u16::from_be(native.sin6_port), 53);
        assert_eq!(native.sin6_scope_id, 9);
        assert_eq!(native.sin6_addr.s6_addr, "2001:db8::5".parse::<Ipv6Addr>().unwrap().octets());
    }

    #[test]
    fn test_region_too_small() {
        let layouts = InetLayouts::network().unwrap();
        let err = SockAddrIn6::wrap(&layouts, MemoryRegion::allocate(27)).unwrap_err();
        assert!(matches!(err, ViewError::RegionTooSmall { required: 28, .. }));
    }

    #[test]
    fn test_views_over_equal_bytes_are_equal() {
        let (_, a) = sockaddr();
        let (_, b) = sockaddr();
        a.set_port(1).unwrap();
        assert_ne!(a, b);
        b.set_port(1).unwrap();
        assert_eq!(a, b);
        assert_eq!(StructView::clone(a.view()), *b.view());
    }
}
