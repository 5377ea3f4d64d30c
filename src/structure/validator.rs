// Tue Jan 13 2026 - Alex

use crate::structure::{LayoutError, StructLayout};

/// Checks the invariants every built layout must hold. Builders run it
/// before handing a layout out.
pub struct LayoutValidator;

impl LayoutValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, layout: &StructLayout) -> Result<(), LayoutError> {
        if layout.field_count() == 0 {
            return Err(LayoutError::Empty(layout.name().to_string()));
        }

        for field in layout.fields() {
            if field.size() == 0 {
                return Err(LayoutError::ZeroLength(field.name().to_string()));
            }
            let end = field
                .checked_end()
                .ok_or_else(|| LayoutError::Overflow(field.name().to_string()))?;
            if end > layout.size() {
                return Err(LayoutError::BeyondSize {
                    field: field.name().to_string(),
                    end,
                    size: layout.size(),
                });
            }
            if layout.is_union() && field.offset().as_usize() != 0 {
                return Err(LayoutError::UnionOffset {
                    field: field.name().to_string(),
                    offset: field.offset().as_usize(),
                });
            }
            if !layout.is_packed() && !field.alignment().is_aligned(field.offset().as_usize()) {
                return Err(LayoutError::Misaligned {
                    field: field.name().to_string(),
                    offset: field.offset().as_usize(),
                    alignment: field.alignment().as_usize(),
                });
            }
        }

        if !layout.is_union() {
            self.check_overlaps(layout)?;
        }
        Ok(())
    }

    /// Fields may alias each other only when they cover identical bytes.
    fn check_overlaps(&self, layout: &StructLayout) -> Result<(), LayoutError> {
        let fields: Vec<_> = layout.fields().collect();
        for (i, field) in fields.iter().enumerate() {
            for other in &fields[..i] {
                if field.overlaps(other) && !field.same_span(other) {
                    return Err(LayoutError::Overlap {
                        layout: layout.name().to_string(),
                        field: field.name().to_string(),
                        other: other.name().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for LayoutValidator {
    fn default() -> Self {
        Self::new()
    }
}
