//! types for working with raw big-endian bytes

/// A trait for font scalars.
///
/// This is an internal trait for encoding and decoding big-endian bytes.
/// Every value read out of a font goes through an implementation of this
/// trait, and test fixtures use [`Scalar::to_raw`] to write them back.
pub trait Scalar: Sized {
    /// The raw byte representation of this type.
    type Raw: sealed::BeByteArray;

    /// The number of bytes occupied by the raw representation.
    const RAW_BYTE_LEN: usize = std::mem::size_of::<Self::Raw>();

    /// Create an instance of this type from raw big-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;

    /// Encode this type as raw big-endian bytes
    fn to_raw(self) -> Self::Raw;

    /// Attempt to read a scalar from a slice.
    ///
    /// This returns `None` unless the slice is exactly `RAW_BYTE_LEN` long.
    fn read(slice: &[u8]) -> Option<Self> {
        sealed::BeByteArray::from_slice(slice).map(Self::from_raw)
    }
}

pub(crate) mod sealed {
    /// A sealed trait for the fixed-size byte arrays backing scalars.
    pub trait BeByteArray: Copy + AsRef<[u8]> {
        /// Must always succeed for `[u8; N]` if `slice.len() == N`, must fail otherwise
        fn from_slice(slice: &[u8]) -> Option<Self>;
    }

    impl<const N: usize> BeByteArray for [u8; N] {
        fn from_slice(slice: &[u8]) -> Option<Self> {
            slice.try_into().ok()
        }
    }
}

/// An internal macro for implementing the `Scalar` trait on newtypes.
#[macro_export]
macro_rules! newtype_scalar {
    ($name:ident, $raw:ty) => {
        impl $crate::Scalar for $name {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                $crate::Scalar::to_raw(self.0)
            }

            fn from_raw(raw: $raw) -> Self {
                Self($crate::Scalar::from_raw(raw))
            }
        }
    };
}

macro_rules! int_scalar {
    ($ty:ty, $raw:ty) => {
        impl crate::raw::Scalar for $ty {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                self.to_be_bytes()
            }

            fn from_raw(raw: $raw) -> $ty {
                Self::from_be_bytes(raw)
            }
        }
    };
}

int_scalar!(u8, [u8; 1]);
int_scalar!(i8, [u8; 1]);
int_scalar!(u16, [u8; 2]);
int_scalar!(i16, [u8; 2]);
int_scalar!(u32, [u8; 4]);
int_scalar!(i32, [u8; 4]);

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn big_endian_order() {
        assert_eq!(u16::read(&[0x01, 0x02]), Some(0x0102));
        assert_eq!(i16::read(&[0xFF, 0xF6]), Some(-10));
        assert_eq!(u32::read(&[0, 0, 1, 0]), Some(256));
        assert_eq!(0x0102u16.to_raw(), [1, 2]);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(u16::read(&[0x01]), None);
        assert_eq!(u16::read(&[0x01, 0x02, 0x03]), None);
        assert_eq!(<u32 as Scalar>::RAW_BYTE_LEN, 4);
    }
}
