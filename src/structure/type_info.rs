// Tue Jan 13 2026 - Alex

use crate::memory::ScalarKind;
use crate::structure::StructLayout;
use std::fmt;
use std::mem::{align_of, size_of};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeInfo {
    Primitive(PrimitiveType),
    Array(PrimitiveType, usize),
    /// A struct or union stored inline.
    Struct(Arc<StructLayout>),
    /// A native pointer to a struct stored elsewhere.
    Pointer(Arc<StructLayout>),
    Padding(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
    Ptr,
}

impl TypeInfo {
    /// Byte size; saturates at `usize::MAX` for arrays too large to exist.
    pub fn size(&self) -> usize {
        self.checked_size().unwrap_or(usize::MAX)
    }

    pub fn checked_size(&self) -> Option<usize> {
        match self {
            Self::Primitive(ty) => Some(ty.size()),
            Self::Array(elem, count) => elem.size().checked_mul(*count),
            Self::Struct(layout) => Some(layout.size()),
            Self::Pointer(_) => Some(PrimitiveType::Ptr.size()),
            Self::Padding(len) => Some(*len),
        }
    }

    pub fn alignment(&self) -> usize {
        match self {
            Self::Primitive(ty) => ty.alignment(),
            Self::Array(elem, _) => elem.alignment(),
            Self::Struct(layout) => layout.alignment().as_usize(),
            Self::Pointer(_) => PrimitiveType::Ptr.alignment(),
            Self::Padding(_) => 1,
        }
    }

    pub fn primitive(&self) -> Option<PrimitiveType> {
        match self {
            Self::Primitive(ty) | Self::Array(ty, _) => Some(*ty),
            _ => None,
        }
    }

    pub fn element_count(&self) -> Option<usize> {
        match self {
            Self::Array(_, count) => Some(*count),
            _ => None,
        }
    }

    pub fn nested_layout(&self) -> Option<&Arc<StructLayout>> {
        match self {
            Self::Struct(layout) | Self::Pointer(layout) => Some(layout),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_, _))
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }
}

impl PrimitiveType {
    pub fn size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
            Self::Ptr => size_of::<usize>(),
        }
    }

    /// The C ABI alignment on the host.
    pub fn alignment(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => align_of::<u16>(),
            Self::U32 | Self::I32 => align_of::<u32>(),
            Self::F32 => align_of::<f32>(),
            Self::U64 | Self::I64 => align_of::<u64>(),
            Self::F64 => align_of::<f64>(),
            Self::Ptr => align_of::<usize>(),
        }
    }

    pub fn scalar_kind(self) -> ScalarKind {
        match self {
            Self::U8 => ScalarKind::U8,
            Self::I8 => ScalarKind::I8,
            Self::U16 => ScalarKind::U16,
            Self::I16 => ScalarKind::I16,
            Self::U32 => ScalarKind::U32,
            Self::I32 => ScalarKind::I32,
            Self::U64 => ScalarKind::U64,
            Self::I64 => ScalarKind::I64,
            Self::F32 => ScalarKind::F32,
            Self::F64 => ScalarKind::F64,
            Self::Ptr if size_of::<usize>() == 8 => ScalarKind::U64,
            Self::Ptr => ScalarKind::U32,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Ptr => "ptr",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => write!(f, "{}", ty),
            Self::Array(elem, count) => write!(f, "[{}; {}]", elem, count),
            Self::Struct(layout) => write!(f, "{} {}", layout.kind(), layout.name()),
            Self::Pointer(layout) => write!(f, "*{} {}", layout.kind(), layout.name()),
            Self::Padding(len) => write!(f, "pad[{}]", len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_sizes() {
        assert_eq!(PrimitiveType::U8.size(), 1);
        assert_eq!(PrimitiveType::I16.size(), 2);
        assert_eq!(PrimitiveType::F32.size(), 4);
        assert_eq!(PrimitiveType::U64.size(), 8);
        assert_eq!(PrimitiveType::Ptr.size(), size_of::<*const u8>());
        assert_eq!(PrimitiveType::U32.alignment(), 4);
    }

    #[test]
    fn test_array_shape() {
        let ty = TypeInfo::Array(PrimitiveType::U16, 8);
        assert_eq!(ty.size(), 16);
        assert_eq!(ty.alignment(), 2);
        assert_eq!(ty.element_count(), Some(8));
        assert_eq!(ty.primitive(), Some(PrimitiveType::U16));
        assert_eq!(ty.to_string(), "[u16; 8]");
    }

    #[test]
    fn test_scalar_kind_mapping() {
        assert_eq!(PrimitiveType::I32.scalar_kind(), ScalarKind::I32);
        assert_eq!(PrimitiveType::Ptr.scalar_kind().size(), PrimitiveType::Ptr.size());
        assert!(PrimitiveType::I8.is_signed());
        assert!(!PrimitiveType::U8.is_signed());
    }
}
