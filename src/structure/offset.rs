// Tue Jan 13 2026 - Alex

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Offset {
    value: usize,
}

impl Offset {
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.value)
    }
}

impl From<usize> for Offset {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
