// Tue Jan 13 2026 - Alex

use crate::memory::ByteOrder;
use crate::structure::{
    Alignment, Field, LayoutError, LayoutKind, LayoutValidator, Offset, StructLayout, TypeInfo,
};
use indexmap::IndexMap;
use std::sync::Arc;

/// One row of a layout table: a name, an optional explicit offset, a type
/// and the byte order its scalars are stored in.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    offset: Option<usize>,
    type_info: TypeInfo,
    order: ByteOrder,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            name: name.into(),
            offset: None,
            type_info,
            order: ByteOrder::Native,
        }
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }
}

pub struct StructBuilder {
    name: String,
    specs: Vec<FieldSpec>,
    packed: bool,
    size: Option<usize>,
    align: Option<usize>,
}

impl StructBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specs: Vec::new(),
            packed: false,
            size: None,
            align: None,
        }
    }

    /// Adds a field at the next naturally aligned offset.
    pub fn field(self, name: impl Into<String>, type_info: TypeInfo) -> Self {
        self.spec(FieldSpec::new(name, type_info))
    }

    pub fn field_with_order(self, name: impl Into<String>, type_info: TypeInfo, order: ByteOrder) -> Self {
        self.spec(FieldSpec::new(name, type_info).order(order))
    }

    pub fn field_at(self, name: impl Into<String>, offset: usize, type_info: TypeInfo) -> Self {
        self.spec(FieldSpec::new(name, type_info).at(offset))
    }

    pub fn padding(self, name: impl Into<String>, len: usize) -> Self {
        self.spec(FieldSpec::new(name, TypeInfo::Padding(len)))
    }

    pub fn spec(mut self, spec: FieldSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// No inter-field padding and alignment 1, like `#pragma pack(1)`.
    pub fn packed(mut self) -> Self {
        self.packed = true;
        self
    }

    /// Declares the total size instead of deriving it from the fields.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Raises the struct alignment above what its members require.
    pub fn align(mut self, align: usize) -> Self {
        self.align = Some(align);
        self
    }

    pub fn build(self) -> Result<Arc<StructLayout>, LayoutError> {
        if self.specs.is_empty() {
            return Err(LayoutError::Empty(self.name));
        }

        let mut fields = IndexMap::with_capacity(self.specs.len());
        let mut cursor = 0usize;
        let mut max_align = Alignment::BYTE;

        for spec in self.specs {
            let Some(size) = spec.type_info.checked_size() else {
                return Err(LayoutError::Overflow(spec.name));
            };
            if size == 0 {
                return Err(LayoutError::ZeroLength(spec.name));
            }
            let align = if self.packed {
                Alignment::BYTE
            } else {
                Alignment::new(spec.type_info.alignment())?
            };
            let offset = match spec.offset {
                Some(offset) => {
                    if !align.is_aligned(offset) {
                        return Err(LayoutError::Misaligned {
                            field: spec.name,
                            offset,
                            alignment: align.as_usize(),
                        });
                    }
                    offset
                }
                None => match align.align(cursor) {
                    Some(offset) => offset,
                    None => return Err(LayoutError::Overflow(spec.name)),
                },
            };
            if fields.contains_key(&spec.name) {
                return Err(LayoutError::DuplicateField {
                    layout: self.name,
                    field: spec.name,
                });
            }

            let Some(end) = offset.checked_add(size) else {
                return Err(LayoutError::Overflow(spec.name));
            };
            cursor = cursor.max(end);
            max_align = max_align.max(align);
            let field = Field::new(spec.name.clone(), Offset::new(offset), spec.type_info).with_order(spec.order);
            fields.insert(spec.name, field);
        }

        if let Some(align) = self.align {
            max_align = max_align.max(Alignment::new(align)?);
        }
        let size = match self.size {
            Some(size) => size,
            None => max_align
                .align(cursor)
                .ok_or_else(|| LayoutError::Overflow(self.name.clone()))?,
        };

        let layout = StructLayout::from_parts(self.name, LayoutKind::Struct, fields, size, max_align, self.packed);
        LayoutValidator::new().validate(&layout)?;
        log::debug!("built struct {} ({} bytes)", layout.name(), layout.size());
        Ok(Arc::new(layout))
    }
}

pub struct UnionBuilder {
    name: String,
    specs: Vec<FieldSpec>,
    size: Option<usize>,
}

impl UnionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specs: Vec::new(),
            size: None,
        }
    }

    pub fn alternative(self, name: impl Into<String>, type_info: TypeInfo) -> Self {
        self.spec(FieldSpec::new(name, type_info))
    }

    pub fn alternative_with_order(self, name: impl Into<String>, type_info: TypeInfo, order: ByteOrder) -> Self {
        self.spec(FieldSpec::new(name, type_info).order(order))
    }

    pub fn spec(mut self, spec: FieldSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn build(self) -> Result<Arc<StructLayout>, LayoutError> {
        if self.specs.is_empty() {
            return Err(LayoutError::Empty(self.name));
        }

        let mut fields = IndexMap::with_capacity(self.specs.len());
        let mut largest = 0usize;
        let mut max_align = Alignment::BYTE;

        for spec in self.specs {
            if let Some(offset) = spec.offset.filter(|&o| o != 0) {
                return Err(LayoutError::UnionOffset { field: spec.name, offset });
            }
            let Some(size) = spec.type_info.checked_size() else {
                return Err(LayoutError::Overflow(spec.name));
            };
            if size == 0 {
                return Err(LayoutError::ZeroLength(spec.name));
            }
            if fields.contains_key(&spec.name) {
                return Err(LayoutError::DuplicateField {
                    layout: self.name,
                    field: spec.name,
                });
            }
            largest = largest.max(size);
            max_align = max_align.max(Alignment::new(spec.type_info.alignment())?);
            let field = Field::new(spec.name.clone(), Offset::zero(), spec.type_info).with_order(spec.order);
            fields.insert(spec.name, field);
        }

        let size = match self.size {
            Some(size) => size,
            None => max_align
                .align(largest)
                .ok_or_else(|| LayoutError::Overflow(self.name.clone()))?,
        };
        let layout = StructLayout::from_parts(self.name, LayoutKind::Union, fields, size, max_align, false);
        LayoutValidator::new().validate(&layout)?;
        log::debug!("built union {} ({} bytes)", layout.name(), layout.size());
        Ok(Arc::new(layout))
    }
}

/// Builds a struct from a field table; fields without an explicit offset are
/// placed sequentially with natural alignment.
pub fn define_struct<I>(name: impl Into<String>, fields: I) -> Result<Arc<StructLayout>, LayoutError>
where
    I: IntoIterator<Item = FieldSpec>,
{
    fields.into_iter().fold(StructBuilder::new(name), StructBuilder::spec).build()
}

/// Builds a union; every alternative starts at offset 0.
pub fn define_union<I>(name: impl Into<String>, alternatives: I) -> Result<Arc<StructLayout>, LayoutError>
where
    I: IntoIterator<Item = FieldSpec>,
{
    alternatives.into_iter().fold(UnionBuilder::new(name), UnionBuilder::spec).build()
}
