// Tue Jan 13 2026 - Alex

use crate::structure::{Field, LayoutError, StructLayout, TypeInfo};

/// A field reached through a dotted path, with its offset from the start of
/// the outermost layout.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedField<'a> {
    pub offset: usize,
    pub field: &'a Field,
}

impl StructLayout {
    /// Resolves `"outer.inner.leaf"` through inline nested structs and
    /// unions. Pointer fields end a path; they have to be dereferenced
    /// through a view.
    pub fn resolve_path<'a>(&'a self, path: &str) -> Result<ResolvedField<'a>, LayoutError> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();
        let mut field = self.field(first)?;
        let mut offset = field.offset().as_usize();

        for segment in segments {
            let TypeInfo::Struct(nested) = field.type_info() else {
                return Err(LayoutError::NotNested(field.name().to_string()));
            };
            field = nested.field(segment)?;
            offset += field.offset().as_usize();
        }

        Ok(ResolvedField { offset, field })
    }

    /// Absolute `(path, offset)` pairs for every leaf, descending into inline
    /// nested layouts.
    pub fn flatten(&self) -> Vec<(String, usize, &Field)> {
        let mut out = Vec::new();
        self.flatten_into("", 0, &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, prefix: &str, base: usize, out: &mut Vec<(String, usize, &'a Field)>) {
        for field in self.fields() {
            let path = if prefix.is_empty() {
                field.name().to_string()
            } else {
                format!("{}.{}", prefix, field.name())
            };
            let offset = base + field.offset().as_usize();
            match field.type_info() {
                TypeInfo::Struct(nested) => nested.flatten_into(&path, offset, out),
                _ => out.push((path, offset, field)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{PrimitiveType, StructBuilder, UnionBuilder};

    #[test]
    fn test_resolve_nested_path() {
        let inner = UnionBuilder::new("inner")
            .alternative("bytes", TypeInfo::Array(PrimitiveType::U8, 4))
            .alternative("word", TypeInfo::Primitive(PrimitiveType::U32))
            .build()
            .unwrap();
        let outer = StructBuilder::new("outer")
            .field("tag", TypeInfo::Primitive(PrimitiveType::U16))
            .field("body", TypeInfo::Struct(inner))
            .build()
            .unwrap();

        let resolved = outer.resolve_path("body.word").unwrap();
        assert_eq!(resolved.offset, 4);
        assert_eq!(resolved.field.name(), "word");

        assert!(matches!(outer.resolve_path("tag.x"), Err(LayoutError::NotNested(_))));
        assert!(matches!(outer.resolve_path("body.nope"), Err(LayoutError::FieldNotFound(_))));

        let leaves: Vec<_> = outer.flatten().into_iter().map(|(p, o, _)| (p, o)).collect();
        assert_eq!(
            leaves,
            vec![
                ("tag".to_string(), 0),
                ("body.bytes".to_string(), 4),
                ("body.word".to_string(), 4),
            ]
        );
    }
}
