// Tue Jan 13 2026 - Alex

pub mod alignment;
pub mod builder;
pub mod error;
pub mod field;
pub mod layout;
pub mod offset;
pub mod registry;
pub mod serializer;
pub mod traversal;
pub mod type_info;
pub mod validator;

pub use alignment::Alignment;
pub use builder::{define_struct, define_union, FieldSpec, StructBuilder, UnionBuilder};
pub use error::LayoutError;
pub use field::Field;
pub use layout::{LayoutKind, StructLayout};
pub use offset::Offset;
pub use registry::LayoutRegistry;
pub use serializer::{SerializableField, SerializableLayout};
pub use traversal::ResolvedField;
pub use type_info::{PrimitiveType, TypeInfo};
pub use validator::LayoutValidator;
