// Fri Jan 16 2026 - Alex

use std::fmt;

/// Address family tag stored in the `family` byte of a socket address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Unspec,
    Inet,
    Inet6,
    Other(u8),
}

impl AddressFamily {
    const UNSPEC: u8 = libc::AF_UNSPEC as u8;
    const INET: u8 = libc::AF_INET as u8;
    const INET6: u8 = libc::AF_INET6 as u8;

    pub fn from_raw(raw: u8) -> Self {
        match raw {
            Self::UNSPEC => Self::Unspec,
            Self::INET => Self::Inet,
            Self::INET6 => Self::Inet6,
            other => Self::Other(other),
        }
    }

    /// The platform value, as found in the family byte.
    pub fn as_raw(self) -> u8 {
        match self {
            Self::Unspec => Self::UNSPEC,
            Self::Inet => Self::INET,
            Self::Inet6 => Self::INET6,
            Self::Other(raw) => raw,
        }
    }
}

impl From<u8> for AddressFamily {
    fn from(raw: u8) -> Self {
        Self::from_raw(raw)
    }
}

impl From<AddressFamily> for u8 {
    fn from(family: AddressFamily) -> Self {
        family.as_raw()
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspec => write!(f, "AF_UNSPEC"),
            Self::Inet => write!(f, "AF_INET"),
            Self::Inet6 => write!(f, "AF_INET6"),
            Self::Other(raw) => write!(f, "AF_{}", raw),
        }
    }
}
