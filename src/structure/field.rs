// Tue Jan 13 2026 - Alex

use crate::memory::ByteOrder;
use crate::structure::{Alignment, Offset, TypeInfo};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    name: String,
    offset: Offset,
    type_info: TypeInfo,
    order: ByteOrder,
}

impl Field {
    pub fn new(name: String, offset: Offset, type_info: TypeInfo) -> Self {
        Self {
            name,
            offset,
            type_info,
            order: ByteOrder::Native,
        }
    }

    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn size(&self) -> usize {
        self.type_info.size()
    }

    pub fn alignment(&self) -> Alignment {
        Alignment::new(self.type_info.alignment()).unwrap_or(Alignment::BYTE)
    }

    pub fn end(&self) -> usize {
        self.checked_end().unwrap_or(usize::MAX)
    }

    pub fn checked_end(&self) -> Option<usize> {
        self.offset.as_usize().checked_add(self.type_info.checked_size()?)
    }

    pub fn overlaps(&self, other: &Field) -> bool {
        self.offset.as_usize() < other.end() && other.offset.as_usize() < self.end()
    }

    pub fn same_span(&self, other: &Field) -> bool {
        self.offset == other.offset && self.size() == other.size()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}: {}", self.name, self.offset, self.type_info)?;
        if self.order != ByteOrder::Native {
            write!(f, " ({})", self.order)?;
        }
        Ok(())
    }
}
