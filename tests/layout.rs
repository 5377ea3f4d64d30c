// Tue Jan 13 2026 - Alex

use structmap::memory::{MemoryReader, MemoryWriter};
use structmap::structure::{PrimitiveType, SerializableLayout, TypeInfo};
use structmap::{define_struct, define_union, FieldSpec, LayoutError, MemoryRegion, StructBuilder, StructMapper, ViewError};

fn prim(ty: PrimitiveType) -> TypeInfo {
    TypeInfo::Primitive(ty)
}

#[test]
fn table_definition_matches_c_rules() {
    let layout = define_struct(
        "timeval_ish",
        [
            FieldSpec::new("flag", prim(PrimitiveType::U8)),
            FieldSpec::new("seconds", prim(PrimitiveType::I64)),
            FieldSpec::new("micros", prim(PrimitiveType::I32)),
        ],
    )
    .unwrap();

    assert_eq!(layout.offset_of("seconds").unwrap(), 8);
    assert_eq!(layout.offset_of("micros").unwrap(), 16);
    assert_eq!(layout.size(), 24);
}

#[test]
fn union_size_is_largest_alternative() {
    let layout = define_union(
        "value",
        [
            FieldSpec::new("b", prim(PrimitiveType::U8)),
            FieldSpec::new("q", prim(PrimitiveType::U64)),
        ],
    )
    .unwrap();
    assert_eq!(layout.size(), 8);
}

#[test]
fn inconsistent_overlap_fails_at_build() {
    let err = StructBuilder::new("broken")
        .field_at("a", 0, prim(PrimitiveType::U32))
        .field_at("b", 2, prim(PrimitiveType::U16))
        .build()
        .unwrap_err();
    assert!(matches!(err, LayoutError::Overlap { .. }));
}

#[test]
fn out_of_bounds_access_is_rejected() {
    let region = MemoryRegion::allocate(8);
    region.fill(0xAB).unwrap();

    for (offset, width) in [(7usize, 2usize), (5, 4), (1, 8), (8, 1)] {
        let err = region.read_bytes(offset, width).unwrap_err();
        assert!(err.is_out_of_bounds(), "{} + {}", offset, width);
    }
    assert!(region.write_u32(6, 0, structmap::ByteOrder::Native).unwrap_err().is_out_of_bounds());
    assert!(region.slice(4, 5).is_err());
    assert_eq!(region.to_vec().unwrap(), vec![0xAB; 8]);
}

#[test]
fn scalar_round_trip_for_every_width() {
    let layout = StructBuilder::new("all")
        .field("a", prim(PrimitiveType::I8))
        .field("b", prim(PrimitiveType::I16))
        .field("c", prim(PrimitiveType::U32))
        .field("d", prim(PrimitiveType::I64))
        .field("e", prim(PrimitiveType::F64))
        .build()
        .unwrap();
    let view = StructMapper::new(layout).allocate();

    for v in [i8::MIN, -1, 0, i8::MAX] {
        view.set("a", v).unwrap();
        assert_eq!(view.get::<i8>("a").unwrap(), v);
    }
    for v in [i16::MIN, 0, i16::MAX] {
        view.set("b", v).unwrap();
        assert_eq!(view.get::<i16>("b").unwrap(), v);
    }
    for v in [0u32, 0xDEADBEEF, u32::MAX] {
        view.set("c", v).unwrap();
        assert_eq!(view.get::<u32>("c").unwrap(), v);
    }
    for v in [i64::MIN, i64::MAX] {
        view.set("d", v).unwrap();
        assert_eq!(view.get::<i64>("d").unwrap(), v);
    }
    view.set("e", -2.5f64).unwrap();
    assert_eq!(view.get::<f64>("e").unwrap(), -2.5);
}

#[test]
fn mapper_rejects_short_region() {
    let layout = StructBuilder::new("pair")
        .field("x", prim(PrimitiveType::U32))
        .field("y", prim(PrimitiveType::U32))
        .build()
        .unwrap();
    let err = StructMapper::new(layout).of(MemoryRegion::allocate(7)).unwrap_err();
    assert!(matches!(err, ViewError::RegionTooSmall { required: 8, actual: 7, .. }));
}

#[test]
fn layout_serializes_to_json() {
    let layouts = structmap::InetLayouts::network().unwrap();
    let json = SerializableLayout::from(layouts.sockaddr_in6().as_ref()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["size"], 28);
    assert_eq!(value["fields"][2]["byte_order"], "big");
    assert_eq!(value["fields"][4]["nested"]["kind"], "union");
}
