// Tue Jan 13 2026 - Alex

use crate::structure::{Alignment, Field, LayoutError};
use indexmap::IndexMap;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Struct,
    Union,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => write!(f, "struct"),
            Self::Union => write!(f, "union"),
        }
    }
}

/// Immutable description of a native struct or union.
///
/// Built once through [`StructBuilder`](crate::structure::StructBuilder) or
/// [`UnionBuilder`](crate::structure::UnionBuilder) and shared as
/// `Arc<StructLayout>` by every view of that shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLayout {
    name: String,
    kind: LayoutKind,
    fields: IndexMap<String, Field>,
    size: usize,
    alignment: Alignment,
    packed: bool,
}

impl StructLayout {
    pub(crate) fn from_parts(
        name: String,
        kind: LayoutKind,
        fields: IndexMap<String, Field>,
        size: usize,
        alignment: Alignment,
        packed: bool,
    ) -> Self {
        Self {
            name,
            kind,
            fields,
            size,
            alignment,
            packed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    pub fn is_union(&self) -> bool {
        self.kind == LayoutKind::Union
    }

    pub fn is_packed(&self) -> bool {
        self.packed
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn field(&self, name: &str) -> Result<&Field, LayoutError> {
        self.get_field(name)
            .ok_or_else(|| LayoutError::FieldNotFound(format!("{}.{}", self.name, name)))
    }

    pub fn offset_of(&self, name: &str) -> Result<usize, LayoutError> {
        self.field(name).map(|f| f.offset().as_usize())
    }

    /// Total size in bytes, including trailing padding.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}

impl Hash for StructLayout {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.kind.hash(state);
        self.size.hash(state);
        self.alignment.hash(state);
        self.packed.hash(state);
        for field in self.fields.values() {
            field.hash(state);
        }
    }
}

impl fmt::Display for StructLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} (size {}, align {}{})",
            self.kind,
            self.name,
            self.size,
            self.alignment.as_usize(),
            if self.packed { ", packed" } else { "" }
        )?;
        for field in self.fields.values() {
            writeln!(f, "  {}", field)?;
        }
        Ok(())
    }
}
