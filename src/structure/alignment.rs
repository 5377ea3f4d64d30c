// Tue Jan 13 2026 - Alex

use crate::structure::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alignment {
    value: usize,
}

impl Alignment {
    pub const BYTE: Self = Self { value: 1 };

    pub fn new(value: usize) -> Result<Self, LayoutError> {
        if value == 0 || !value.is_power_of_two() {
            return Err(LayoutError::InvalidAlignment(value));
        }
        Ok(Self { value })
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }

    /// Rounds `offset` up to the next multiple of this alignment, or `None`
    /// when that is not representable.
    pub fn align(&self, offset: usize) -> Option<usize> {
        offset.checked_add(self.value - 1).map(|v| v & !(self.value - 1))
    }

    pub fn is_aligned(&self, offset: usize) -> bool {
        offset & (self.value - 1) == 0
    }

    pub fn max(self, other: Self) -> Self {
        if other.value > self.value {
            other
        } else {
            self
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::BYTE
    }
}
