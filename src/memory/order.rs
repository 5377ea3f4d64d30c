// Wed Jan 14 2026 - Alex

//! Byte-order policy and the fixed-width scalar encodings used by every typed
//! region access. A field's order is part of its declaration; the region only
//! applies whatever order it is handed.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    /// Network byte order.
    pub const NETWORK: Self = Self::Big;

    /// Resolves `Native` to the concrete order of the host.
    pub fn resolve(self) -> Self {
        match self {
            Self::Native if cfg!(target_endian = "little") => Self::Little,
            Self::Native => Self::Big,
            other => other,
        }
    }

    /// True when values in this order must be byte-swapped on this host.
    pub fn needs_swap(self) -> bool {
        self.resolve() != Self::Native.resolve()
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "native" | "host" => Some(Self::Native),
            "little" | "le" => Some(Self::Little),
            "big" | "be" | "network" => Some(Self::Big),
            _ => None,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Little => write!(f, "le"),
            Self::Big => write!(f, "be"),
        }
    }
}

/// Concrete numeric representation of a scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
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
}

impl ScalarKind {
    pub fn size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
        }
    }
}

/// A fixed-width value that can be encoded into and decoded from raw bytes.
///
/// `decode` and `encode` are only ever handed slices of exactly `SIZE` bytes;
/// the bounds check happens in the region before the call.
pub trait Scalar: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    const SIZE: usize;
    const KIND: ScalarKind;

    fn decode(bytes: &[u8], order: ByteOrder) -> Self;
    fn encode(self, order: ByteOrder, out: &mut [u8]);
}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();
                const KIND: ScalarKind = ScalarKind::$kind;

                #[inline]
                fn decode(bytes: &[u8], order: ByteOrder) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&bytes[..Self::SIZE]);
                    match order {
                        ByteOrder::Native => <$ty>::from_ne_bytes(raw),
                        ByteOrder::Little => <$ty>::from_le_bytes(raw),
                        ByteOrder::Big => <$ty>::from_be_bytes(raw),
                    }
                }

                #[inline]
                fn encode(self, order: ByteOrder, out: &mut [u8]) {
                    let raw = match order {
                        ByteOrder::Native => self.to_ne_bytes(),
                        ByteOrder::Little => self.to_le_bytes(),
                        ByteOrder::Big => self.to_be_bytes(),
                    };
                    out[..Self::SIZE].copy_from_slice(&raw);
                }
            }
        )*
    };
}

impl_scalar! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
}

/// Encodes a slice of scalars into one contiguous buffer.
pub fn encode_all<T: Scalar>(values: &[T], order: ByteOrder) -> Vec<u8> {
    let mut buf = vec![0u8; values.len() * T::SIZE];
    for (value, chunk) in values.iter().zip(buf.chunks_exact_mut(T::SIZE)) {
        value.encode(order, chunk);
    }
    buf
}

/// Decodes every complete `T::SIZE` chunk of `bytes`.
pub fn decode_all<T: Scalar>(bytes: &[u8], order: ByteOrder) -> Vec<T> {
    bytes.chunks_exact(T::SIZE).map(|chunk| T::decode(chunk, order)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_port() {
        let mut out = [0u8; 2];
        0x1F90u16.encode(ByteOrder::Big, &mut out);
        assert_eq!(out, [0x1F, 0x90]);
        assert_eq!(u16::decode(&out, ByteOrder::Big), 8080);
        assert_eq!(u16::decode(&out, ByteOrder::Little), 0x901F);
    }

    #[test]
    fn test_native_matches_host() {
        let mut out = [0u8; 4];
        1u32.encode(ByteOrder::Native, &mut out);
        assert_eq!(out, 1u32.to_ne_bytes());
        assert!(!ByteOrder::Native.needs_swap());
        assert_ne!(ByteOrder::Little.needs_swap(), ByteOrder::Big.needs_swap());
    }

    #[test]
    fn test_signed_and_float() {
        let mut out = [0u8; 8];
        (-2i16).encode(ByteOrder::Little, &mut out);
        assert_eq!(&out[..2], &[0xFE, 0xFF]);
        assert_eq!(i16::decode(&out, ByteOrder::Little), -2);

        1.5f64.encode(ByteOrder::Big, &mut out);
        assert_eq!(f64::decode(&out, ByteOrder::Big), 1.5);
    }

    #[test]
    fn test_encode_decode_all() {
        let bytes = encode_all(&[1u16, 2, 3], ByteOrder::Big);
        assert_eq!(bytes, vec![0, 1, 0, 2, 0, 3]);
        assert_eq!(decode_all::<u16>(&bytes, ByteOrder::Big), vec![1, 2, 3]);
    }

    #[test]
    fn test_order_parsing() {
        assert_eq!(ByteOrder::from_str_loose("network"), Some(ByteOrder::Big));
        assert_eq!(ByteOrder::from_str_loose("LE"), Some(ByteOrder::Little));
        assert_eq!(ByteOrder::from_str_loose("middle"), None);
    }
}
