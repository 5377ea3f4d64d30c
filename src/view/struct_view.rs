// Thu Jan 15 2026 - Alex

use crate::memory::order::{decode_all, encode_all};
use crate::memory::{Address, AddressSpace, MemoryReader, MemoryRegion, MemoryWriter, Scalar, ScalarKind};
use crate::structure::{Field, PrimitiveType, StructLayout, TypeInfo};
use crate::view::ViewError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Typed access to one structure laid out in a memory region.
///
/// The view holds no state of its own beyond the two handles; every getter
/// reads the region and every setter writes straight through to it.
#[derive(Clone)]
pub struct StructView {
    layout: Arc<StructLayout>,
    region: MemoryRegion,
}

impl StructView {
    /// `region` must already be exactly `layout.size()` bytes.
    pub(crate) fn from_parts(layout: Arc<StructLayout>, region: MemoryRegion) -> Self {
        Self { layout, region }
    }

    pub fn layout(&self) -> &Arc<StructLayout> {
        &self.layout
    }

    pub fn region(&self) -> &MemoryRegion {
        &self.region
    }

    pub fn address(&self) -> Address {
        self.region.address()
    }

    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Copy of the bytes covered by the layout.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ViewError> {
        Ok(self.region.to_vec()?)
    }

    pub fn get<T: Scalar>(&self, name: &str) -> Result<T, ViewError> {
        let field = self.layout.field(name)?;
        self.read_scalar(field.offset().as_usize(), field)
    }

    pub fn set<T: Scalar>(&self, name: &str, value: T) -> Result<(), ViewError> {
        let field = self.layout.field(name)?;
        self.write_scalar(field.offset().as_usize(), field, value)
    }

    /// Reads a scalar through a dotted path such as `"sin6_addr.s6_addr32"`.
    pub fn get_path<T: Scalar>(&self, path: &str) -> Result<T, ViewError> {
        let resolved = self.layout.resolve_path(path)?;
        self.read_scalar(resolved.offset, resolved.field)
    }

    pub fn set_path<T: Scalar>(&self, path: &str, value: T) -> Result<(), ViewError> {
        let resolved = self.layout.resolve_path(path)?;
        self.write_scalar(resolved.offset, resolved.field, value)
    }

    /// A freshly materialized copy of an array field; never aliases the region.
    pub fn get_array<T: Scalar>(&self, name: &str) -> Result<Vec<T>, ViewError> {
        let field = self.layout.field(name)?;
        let count = array_count(field, T::KIND)?;
        let bytes = self.region.read_bytes(field.offset().as_usize(), count * T::SIZE)?;
        Ok(decode_all(&bytes, field.order()))
    }

    /// Writes every element of an array field. `values` must hold exactly the
    /// declared element count; on any error the region is left untouched.
    pub fn set_array<T: Scalar>(&self, name: &str, values: &[T]) -> Result<(), ViewError> {
        let field = self.layout.field(name)?;
        let count = array_count(field, T::KIND)?;
        if values.len() != count {
            return Err(ViewError::InvalidArgument(format!(
                "{}: length must be {}, got {}",
                field.name(),
                count,
                values.len()
            )));
        }
        let bytes = encode_all(values, field.order());
        self.region.write_from(field.offset().as_usize(), &bytes)?;
        Ok(())
    }

    /// Raw bytes of any field.
    pub fn get_bytes(&self, name: &str) -> Result<Vec<u8>, ViewError> {
        let field = self.layout.field(name)?;
        Ok(self.region.read_bytes(field.offset().as_usize(), field.size())?)
    }

    pub fn set_bytes(&self, name: &str, data: &[u8]) -> Result<(), ViewError> {
        let field = self.layout.field(name)?;
        if data.len() != field.size() {
            return Err(ViewError::InvalidArgument(format!(
                "{}: length must be {}, got {}",
                field.name(),
                field.size(),
                data.len()
            )));
        }
        self.region.write_from(field.offset().as_usize(), data)?;
        Ok(())
    }

    /// View of an inline nested struct or union, sharing this region.
    ///
    /// Returns `None` when the nested structure's computed address is the
    /// null sentinel. A sub-region of a backed, non-empty region always has
    /// an address, so in practice only views over address-less storage see
    /// `None` here; pointer fields report null through [`deref`](Self::deref).
    pub fn nested(&self, name: &str) -> Result<Option<StructView>, ViewError> {
        let field = self.layout.field(name)?;
        let TypeInfo::Struct(nested) = field.type_info() else {
            return Err(ViewError::NotAStruct(field.name().to_string()));
        };
        let sub = self.region.slice(field.offset().as_usize(), nested.size())?;
        if sub.is_null() {
            return Ok(None);
        }
        Ok(Some(StructView::from_parts(Arc::clone(nested), sub)))
    }

    /// The raw value of a pointer field, read once at native pointer width.
    pub fn pointer(&self, name: &str) -> Result<Address, ViewError> {
        let field = self.pointer_field(name)?;
        Ok(self.region.read_ptr(field.offset().as_usize())?)
    }

    pub fn set_pointer(&self, name: &str, target: Address) -> Result<(), ViewError> {
        let field = self.pointer_field(name)?;
        self.region.write_ptr(field.offset().as_usize(), target)?;
        Ok(())
    }

    /// Follows a pointer field through `space`. A null pointer yields `None`.
    pub fn deref(&self, name: &str, space: &AddressSpace) -> Result<Option<StructView>, ViewError> {
        let field = self.pointer_field(name)?;
        let TypeInfo::Pointer(target) = field.type_info() else {
            return Err(ViewError::NotAPointer(field.name().to_string()));
        };
        let address = self.region.read_ptr(field.offset().as_usize())?;
        log::trace!("deref {}.{} -> {}", self.layout.name(), name, address);
        let region = space.resolve(address, target.size())?;
        Ok(region.map(|r| StructView::from_parts(Arc::clone(target), r)))
    }

    fn pointer_field(&self, name: &str) -> Result<&Field, ViewError> {
        let field = self.layout.field(name)?;
        match field.type_info() {
            TypeInfo::Pointer(_) | TypeInfo::Primitive(PrimitiveType::Ptr) => Ok(field),
            _ => Err(ViewError::NotAPointer(field.name().to_string())),
        }
    }

    fn read_scalar<T: Scalar>(&self, offset: usize, field: &Field) -> Result<T, ViewError> {
        check_scalar(field, T::KIND)?;
        Ok(self.region.read(offset, field.order())?)
    }

    fn write_scalar<T: Scalar>(&self, offset: usize, field: &Field, value: T) -> Result<(), ViewError> {
        check_scalar(field, T::KIND)?;
        self.region.write(offset, value, field.order())?;
        Ok(())
    }

    fn describe(&self, field: &Field) -> String {
        self.try_describe(field).unwrap_or_else(|e| format!("<{}>", e))
    }

    fn try_describe(&self, field: &Field) -> Result<String, ViewError> {
        let offset = field.offset().as_usize();
        let order = field.order();
        let region = &self.region;
        let text = match field.type_info() {
            TypeInfo::Primitive(ty) => match ty {
                PrimitiveType::U8 => region.read::<u8>(offset, order)?.to_string(),
                PrimitiveType::I8 => region.read::<i8>(offset, order)?.to_string(),
                PrimitiveType::U16 => region.read::<u16>(offset, order)?.to_string(),
                PrimitiveType::I16 => region.read::<i16>(offset, order)?.to_string(),
                PrimitiveType::U32 => region.read::<u32>(offset, order)?.to_string(),
                PrimitiveType::I32 => region.read::<i32>(offset, order)?.to_string(),
                PrimitiveType::U64 => region.read::<u64>(offset, order)?.to_string(),
                PrimitiveType::I64 => region.read::<i64>(offset, order)?.to_string(),
                PrimitiveType::F32 => region.read::<f32>(offset, order)?.to_string(),
                PrimitiveType::F64 => region.read::<f64>(offset, order)?.to_string(),
                PrimitiveType::Ptr => region.read_ptr(offset)?.to_string(),
            },
            TypeInfo::Pointer(_) => region.read_ptr(offset)?.to_string(),
            TypeInfo::Struct(_) => match self.nested(field.name())? {
                Some(nested) => format!("{:?}", nested),
                None => "null".to_string(),
            },
            TypeInfo::Array(_, _) | TypeInfo::Padding(_) => {
                format!("{:02x?}", region.read_bytes(offset, field.size())?)
            }
        };
        Ok(text)
    }
}

fn check_scalar(field: &Field, kind: ScalarKind) -> Result<(), ViewError> {
    match field.type_info() {
        TypeInfo::Primitive(ty) if ty.scalar_kind() == kind => Ok(()),
        other => Err(ViewError::TypeMismatch {
            field: field.name().to_string(),
            declared: other.to_string(),
            requested: kind,
        }),
    }
}

fn array_count(field: &Field, kind: ScalarKind) -> Result<usize, ViewError> {
    match field.type_info() {
        TypeInfo::Array(ty, count) if ty.scalar_kind() == kind => Ok(*count),
        other => Err(ViewError::TypeMismatch {
            field: field.name().to_string(),
            declared: other.to_string(),
            requested: kind,
        }),
    }
}

impl PartialEq for StructView {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.layout, &other.layout) || self.layout == other.layout)
            && self.region.content_eq(&other.region)
    }
}

impl Eq for StructView {}

impl Hash for StructView {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.layout.name().hash(state);
        // An unreadable view hashes by name only.
        if let Ok(bytes) = self.to_bytes() {
            bytes.hash(state);
        }
    }
}

impl fmt::Debug for StructView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.layout.name());
        for field in self.layout.fields() {
            s.field(field.name(), &format_args!("{}", self.describe(field)));
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::ByteOrder;
    use crate::structure::{StructBuilder, UnionBuilder};
    use crate::view::StructMapper;
    use std::collections::hash_map::DefaultHasher;

    fn words() -> Arc<StructLayout> {
        UnionBuilder::new("words")
            .alternative("bytes", TypeInfo::Array(PrimitiveType::U8, 8))
            .alternative("halves", TypeInfo::Array(PrimitiveType::U16, 4))
            .alternative_with_order("be_words", TypeInfo::Array(PrimitiveType::U32, 2), ByteOrder::Big)
            .build()
            .unwrap()
    }

    fn record() -> Arc<StructLayout> {
        StructBuilder::new("record")
            .field("id", TypeInfo::Primitive(PrimitiveType::I32))
            .field_with_order("len", TypeInfo::Primitive(PrimitiveType::U16), ByteOrder::Big)
            .field("body", TypeInfo::Struct(words()))
            .field("next", TypeInfo::Pointer(words()))
            .build()
            .unwrap()
    }

    fn hash_of(view: &StructView) -> u64 {
        let mut hasher = DefaultHasher::new();
        view.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_scalar_round_trip_and_order() {
        let view = StructMapper::new(record()).allocate();
        view.set("id", -42i32).unwrap();
        view.set("len", 0x0102u16).unwrap();

        assert_eq!(view.get::<i32>("id").unwrap(), -42);
        assert_eq!(view.get::<u16>("len").unwrap(), 0x0102);
        assert_eq!(view.get_bytes("len").unwrap(), vec![0x01, 0x02]);
    }

    #[test]
    fn test_type_mismatch_and_missing_field() {
        let view = StructMapper::new(record()).allocate();
        assert!(matches!(view.get::<u32>("id"), Err(ViewError::TypeMismatch { .. })));
        assert!(matches!(view.set("len", 1u32), Err(ViewError::TypeMismatch { .. })));
        assert!(matches!(view.get::<u8>("body"), Err(ViewError::TypeMismatch { .. })));
        assert!(matches!(view.get::<u8>("missing"), Err(ViewError::Layout(_))));
    }

    #[test]
    fn test_union_alternatives_alias() {
        let view = StructMapper::new(words()).allocate();
        view.set_array("be_words", &[0x01020304u32, 0]).unwrap();

        assert_eq!(view.get_array::<u8>("bytes").unwrap(), vec![1, 2, 3, 4, 0, 0, 0, 0]);
        let halves = view.get_array::<u16>("halves").unwrap();
        assert_eq!(halves[0], u16::from_ne_bytes([1, 2]));
        assert_eq!(halves.len(), 4);
    }

    #[test]
    fn test_wrong_length_array_leaves_region_untouched() {
        let view = StructMapper::new(words()).allocate();
        view.set_array("bytes", &[9u8; 8]).unwrap();

        for bad in [7usize, 9] {
            let err = view.set_array("bytes", &vec![1u8; bad][..]).unwrap_err();
            assert!(err.is_invalid_argument());
            assert!(err.to_string().contains("length must be 8"));
        }
        assert!(view.set_bytes("halves", &[0u8; 7]).unwrap_err().is_invalid_argument());
        assert_eq!(view.to_bytes().unwrap(), vec![9u8; 8]);
    }

    #[test]
    fn test_get_array_returns_copy() {
        let view = StructMapper::new(words()).allocate();
        let mut copy = view.get_array::<u8>("bytes").unwrap();
        copy[0] = 0xFF;
        assert_eq!(view.get_array::<u8>("bytes").unwrap()[0], 0);
    }

    #[test]
    fn test_nested_view_shares_region() {
        let view = StructMapper::new(record()).allocate();
        let body = view.nested("body").unwrap().unwrap();
        let offset = record().offset_of("body").unwrap();

        assert_eq!(body.address(), view.address() + offset as u64);
        body.set_array("bytes", &[7u8; 8]).unwrap();
        assert_eq!(view.region().read_bytes(offset, 8).unwrap(), vec![7u8; 8]);
        assert!(view.get_path::<u8>("body.bytes").is_err());

        assert!(matches!(view.nested("id"), Err(ViewError::NotAStruct(_))));
    }

    #[test]
    fn test_pointer_deref() {
        let space_target = StructMapper::new(words()).allocate();
        space_target.set_array("bytes", &[1, 2, 3, 4, 5, 6, 7, 8u8]).unwrap();

        let mut space = AddressSpace::new();
        space.map(space_target.region().clone()).unwrap();

        let view = StructMapper::new(record()).allocate();
        assert!(view.pointer("next").unwrap().is_null());
        assert!(view.deref("next", &space).unwrap().is_none());

        view.set_pointer("next", space_target.address()).unwrap();
        let target = view.deref("next", &space).unwrap().unwrap();
        assert_eq!(target, space_target);
        assert!(matches!(view.pointer("id"), Err(ViewError::NotAPointer(_))));
    }

    #[test]
    fn test_path_access() {
        let layout = StructBuilder::new("outer")
            .field("pad", TypeInfo::Primitive(PrimitiveType::U32))
            .field("inner", TypeInfo::Struct(record()))
            .build()
            .unwrap();
        let view = StructMapper::new(layout).allocate();
        view.set_path("inner.len", 0xABCDu16).unwrap();
        assert_eq!(view.get_path::<u16>("inner.len").unwrap(), 0xABCD);

        let inner = view.nested("inner").unwrap().unwrap();
        assert_eq!(inner.get::<u16>("len").unwrap(), 0xABCD);
    }

    #[test]
    fn test_structural_equality_and_hash() {
        let mapper = StructMapper::new(record());
        let a = mapper.allocate();
        let b = mapper.allocate();
        assert_ne!(a.address(), b.address());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.region().write_u8(5, 1).unwrap();
        assert_ne!(a, b);

        a.region().write_u8(5, 1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_debug_lists_fields() {
        let view = StructMapper::new(record()).allocate();
        view.set("id", 5i32).unwrap();
        let text = format!("{:?}", view);
        assert!(text.starts_with("record"));
        assert!(text.contains("id: 5"));
        assert!(text.contains("words"));
    }
}
