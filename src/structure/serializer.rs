// Tue Jan 13 2026 - Alex

use crate::memory::ByteOrder;
use crate::structure::{StructLayout, TypeInfo};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableLayout {
    pub name: String,
    pub kind: String,
    pub size: usize,
    pub alignment: usize,
    pub packed: bool,
    pub fields: Vec<SerializableField>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableField {
    pub name: String,
    pub offset: usize,
    pub size: usize,
    pub alignment: usize,
    #[serde(rename = "type")]
    pub type_name: String,
    pub byte_order: ByteOrder,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nested: Option<Box<SerializableLayout>>,
}

impl From<&StructLayout> for SerializableLayout {
    fn from(layout: &StructLayout) -> Self {
        Self {
            name: layout.name().to_string(),
            kind: layout.kind().to_string(),
            size: layout.size(),
            alignment: layout.alignment().as_usize(),
            packed: layout.is_packed(),
            fields: layout
                .fields()
                .map(|f| SerializableField {
                    name: f.name().to_string(),
                    offset: f.offset().as_usize(),
                    size: f.size(),
                    alignment: f.alignment().as_usize(),
                    type_name: f.type_info().to_string(),
                    byte_order: f.order(),
                    nested: match f.type_info() {
                        TypeInfo::Struct(nested) => Some(Box::new(Self::from(nested.as_ref()))),
                        _ => None,
                    },
                })
                .collect(),
        }
    }
}

impl SerializableLayout {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
