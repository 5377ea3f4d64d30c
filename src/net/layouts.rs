// Fri Jan 16 2026 - Alex

use crate::memory::ByteOrder;
use crate::structure::{LayoutError, LayoutRegistry, PrimitiveType, StructBuilder, StructLayout, TypeInfo, UnionBuilder};
use std::sync::Arc;

pub const IN6_ADDR: &str = "in6_addr";
pub const SOCKADDR_IN6: &str = "sockaddr_in6";
pub const SOCKADDR_IN: &str = "sockaddr_in";

/// The socket address layouts, built once for one wire byte-order policy and
/// shared by every view created from them.
///
/// Port, flow info and the IPv4 address are stored in `wire_order`; the
/// address union alternatives and the scope id stay in host order.
#[derive(Debug, Clone)]
pub struct InetLayouts {
    wire_order: ByteOrder,
    in6_addr: Arc<StructLayout>,
    sockaddr_in6: Arc<StructLayout>,
    sockaddr_in: Arc<StructLayout>,
}

impl InetLayouts {
    pub fn new(wire_order: ByteOrder) -> Result<Self, LayoutError> {
        let in6_addr = UnionBuilder::new(IN6_ADDR)
            .alternative("s6_addr", TypeInfo::Array(PrimitiveType::U8, 16))
            .alternative("s6_addr16", TypeInfo::Array(PrimitiveType::U16, 8))
            .alternative("s6_addr32", TypeInfo::Array(PrimitiveType::U32, 4))
            .build()?;

        let sockaddr_in6 = StructBuilder::new(SOCKADDR_IN6)
            .field("sin6_len", TypeInfo::Primitive(PrimitiveType::U8))
            .field("sin6_family", TypeInfo::Primitive(PrimitiveType::U8))
            .field_with_order("sin6_port", TypeInfo::Primitive(PrimitiveType::U16), wire_order)
            .field_with_order("sin6_flowinfo", TypeInfo::Primitive(PrimitiveType::U32), wire_order)
            .field("sin6_addr", TypeInfo::Struct(Arc::clone(&in6_addr)))
            .field("sin6_scope_id", TypeInfo::Primitive(PrimitiveType::U32))
            .build()?;

        let sockaddr_in = StructBuilder::new(SOCKADDR_IN)
            .field("sin_len", TypeInfo::Primitive(PrimitiveType::U8))
            .field("sin_family", TypeInfo::Primitive(PrimitiveType::U8))
            .field_with_order("sin_port", TypeInfo::Primitive(PrimitiveType::U16), wire_order)
            .field_with_order("sin_addr", TypeInfo::Primitive(PrimitiveType::U32), wire_order)
            .field("sin_zero", TypeInfo::Array(PrimitiveType::U8, 8))
            .build()?;

        Ok(Self {
            wire_order,
            in6_addr,
            sockaddr_in6,
            sockaddr_in,
        })
    }

    /// Layouts with wire fields in network byte order.
    pub fn network() -> Result<Self, LayoutError> {
        Self::new(ByteOrder::NETWORK)
    }

    pub fn wire_order(&self) -> ByteOrder {
        self.wire_order
    }

    pub fn in6_addr(&self) -> &Arc<StructLayout> {
        &self.in6_addr
    }

    pub fn sockaddr_in6(&self) -> &Arc<StructLayout> {
        &self.sockaddr_in6
    }

    pub fn sockaddr_in(&self) -> &Arc<StructLayout> {
        &self.sockaddr_in
    }

    pub fn all(&self) -> [&Arc<StructLayout>; 3] {
        [&self.in6_addr, &self.sockaddr_in6, &self.sockaddr_in]
    }

    pub fn register(&self, registry: &LayoutRegistry) {
        for layout in self.all() {
            registry.insert(Arc::clone(layout));
        }
    }
}
