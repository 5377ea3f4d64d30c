// Fri Jan 16 2026 - Alex

use crate::memory::MemoryRegion;
use crate::net::InetLayouts;
use crate::view::{CopyFrom, HasView, StructMapper, StructView, ViewError};
use std::fmt;
use std::net::Ipv6Addr;

/// Typed view of an `in6_addr`: the same 16 bytes as bytes, shorts or ints.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct In6Addr {
    view: StructView,
}

impl In6Addr {
    pub fn wrap(layouts: &InetLayouts, region: MemoryRegion) -> Result<Self, ViewError> {
        let view = StructMapper::new(layouts.in6_addr().clone()).of(region)?;
        Ok(Self { view })
    }

    pub(crate) fn from_view(view: StructView) -> Self {
        Self { view }
    }

    pub fn bytes(&self) -> Result<Vec<u8>, ViewError> {
        self.view.get_array("s6_addr")
    }

    pub fn set_bytes(&self, bytes: &[u8]) -> Result<(), ViewError> {
        self.view.set_array("s6_addr", bytes)
    }

    pub fn shorts(&self) -> Result<Vec<u16>, ViewError> {
        self.view.get_array("s6_addr16")
    }

    pub fn set_shorts(&self, shorts: &[u16]) -> Result<(), ViewError> {
        self.view.set_array("s6_addr16", shorts)
    }

    pub fn ints(&self) -> Result<Vec<u32>, ViewError> {
        self.view.get_array("s6_addr32")
    }

    pub fn set_ints(&self, ints: &[u32]) -> Result<(), ViewError> {
        self.view.set_array("s6_addr32", ints)
    }

    pub fn to_ipv6(&self) -> Result<Ipv6Addr, ViewError> {
        let mut octets = [0u8; 16];
        octets.copy_from_slice(&self.bytes()?);
        Ok(Ipv6Addr::from(octets))
    }

    pub fn is_unspecified(&self) -> Result<bool, ViewError> {
        Ok(self.bytes()?.iter().all(|&b| b == 0))
    }
}

impl HasView for In6Addr {
    fn view(&self) -> &StructView {
        &self.view
    }
}

impl CopyFrom<Ipv6Addr> for In6Addr {
    fn copy_from(&self, src: &Ipv6Addr) -> Result<(), ViewError> {
        self.set_bytes(&src.octets())
    }
}

impl CopyFrom<In6Addr> for In6Addr {
    fn copy_from(&self, src: &In6Addr) -> Result<(), ViewError> {
        self.view.copy_from(&src.view)
    }
}

impl fmt::Debug for In6Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_ipv6() {
            Ok(ip) => write!(f, "In6Addr({})", ip),
            Err(e) => write!(f, "In6Addr(<{}>)", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> In6Addr {
        let layouts = InetLayouts::network().unwrap();
        In6Addr::wrap(&layouts, MemoryRegion::allocate(16)).unwrap()
    }

    #[test]
    fn test_ints_alias_bytes() {
        let addr = addr();
        addr.set_ints(&[1, 0, 0, 0]).unwrap();

        let mut expected = vec![0u8; 16];
        expected[..4].copy_from_slice(&1u32.to_ne_bytes());
        assert_eq!(addr.bytes().unwrap(), expected);
        assert_eq!(addr.shorts().unwrap()[0], u16::from_ne_bytes([expected[0], expected[1]]));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let addr = addr();
        addr.set_bytes(&[0xAA; 16]).unwrap();

        assert!(addr.set_bytes(&[0u8; 15]).unwrap_err().is_invalid_argument());
        assert!(addr.set_bytes(&[0u8; 17]).unwrap_err().is_invalid_argument());
        assert!(addr.set_shorts(&[0u16; 7]).unwrap_err().is_invalid_argument());
        assert!(addr.set_ints(&[0u32; 5]).unwrap_err().is_invalid_argument());
        assert_eq!(addr.bytes().unwrap(), vec![0xAA; 16]);
    }

    #[test]
    fn test_ipv6_conversion() {
        let addr = addr();
        assert!(addr.is_unspecified().unwrap());

        let ip: Ipv6Addr = "fe80::1".parse().unwrap();
        addr.copy_from(&ip).unwrap();
        assert_eq!(addr.to_ipv6().unwrap(), ip);
        assert!(!addr.is_unspecified().unwrap());
        assert_eq!(format!("{:?}", addr), "In6Addr(fe80::1)");
    }
}
