// Tue Jan 13 2026 - Alex

use crate::structure::Alignment;
use std::fmt;
use std::ops::{Add, Sub};

/// An absolute machine address. `Address::NULL` is the sentinel for "no storage".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address {
    value: u64,
}

impl Address {
    pub const NULL: Self = Self { value: 0 };

    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self::NULL
    }

    pub fn from_ptr(ptr: *const u8) -> Self {
        Self { value: ptr as usize as u64 }
    }

    pub fn as_u64(&self) -> u64 {
        self.value
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.value as usize as *const u8
    }

    pub fn is_null(&self) -> bool {
        self.value == 0
    }

    pub fn is_aligned(&self, alignment: Alignment) -> bool {
        self.value & Self::mask(alignment) == 0
    }

    pub fn align_down(&self, alignment: Alignment) -> Self {
        Self { value: self.value & !Self::mask(alignment) }
    }

    /// `None` when rounding up passes the top of the address space.
    pub fn align_up(&self, alignment: Alignment) -> Option<Self> {
        let mask = Self::mask(alignment);
        self.value.checked_add(mask).map(|v| Self { value: v & !mask })
    }

    fn mask(alignment: Alignment) -> u64 {
        alignment.as_usize() as u64 - 1
    }

    /// Wrapping offset, never panics on overflow.
    pub fn offset(&self, offset: u64) -> Self {
        Self { value: self.value.wrapping_add(offset) }
    }

    pub fn checked_add(&self, offset: u64) -> Option<Self> {
        self.value.checked_add(offset).map(Self::new)
    }

    pub fn is_within_range(&self, start: Self, end: Self) -> bool {
        self.value >= start.value && self.value < end.value
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.value)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl Add<u64> for Address {
    type Output = Self;
    fn add(self, rhs: u64) -> Self::Output {
        self.offset(rhs)
    }
}

impl Sub<Address> for Address {
    type Output = u64;
    fn sub(self, rhs: Address) -> Self::Output {
        self.value.wrapping_sub(rhs.value)
    }
}

impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Address> for u64 {
    fn from(addr: Address) -> Self {
        addr.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sentinel() {
        assert!(Address::NULL.is_null());
        assert!(Address::zero().is_null());
        assert!(!Address::new(0x1000).is_null());
    }

    #[test]
    fn test_alignment() {
        let four = Alignment::new(4).unwrap();
        let addr = Address::new(0x1003);
        assert_eq!(addr.align_down(four), Address::new(0x1000));
        assert_eq!(addr.align_up(four), Some(Address::new(0x1004)));
        assert!(Address::new(0x1008).is_aligned(Alignment::new(8).unwrap()));
        assert!(!addr.is_aligned(four));
        assert!(addr.is_aligned(Alignment::BYTE));
        assert_eq!(Address::new(u64::MAX).align_up(four), None);
    }

    #[test]
    fn test_arithmetic() {
        let base = Address::new(0x2000);
        assert_eq!(base + 0x18, Address::new(0x2018));
        assert_eq!(Address::new(0x2018) - base, 0x18);
        assert_eq!(Address::new(u64::MAX).checked_add(1), None);
        assert_eq!(format!("{}", base), "0x0000000000002000");
    }
}
