//! small utilities used in tests

use sfnt_types::Scalar;

/// A convenience type for generating a buffer of big-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct BeBuffer {
    data: Vec<u8>,
}

impl BeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer contains zero bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return a reference to the contents of the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(mut self, iter: impl IntoIterator<Item = T>) -> Self {
        for item in iter {
            self.data.extend(item.to_raw().as_ref());
        }
        self
    }

    /// Append raw bytes, such as a previously built table.
    pub fn extend_from_slice(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    /// Pad with zeros until the length is a multiple of `alignment`.
    pub fn align_to(mut self, alignment: usize) -> Self {
        let padded = self.data.len().next_multiple_of(alignment);
        self.data.resize(padded, 0);
        self
    }
}

impl std::ops::Deref for BeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Build a [`BeBuffer`] from a comma separated list of scalars.
///
/// Each value is a literal, an identifier, a parenthesized expression or a
/// bracketed list of expressions.
#[macro_export]
macro_rules! be_buffer {
    ( $( $item:tt )* ) => {{
        let builder = $crate::bebuffer::BeBuffer::new();
        $crate::be_buffer_add!(builder, $( $item )*)
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! be_buffer_add {
    ($builder:expr $(,)?) => {
        $builder
    };
    ($builder:expr, $item:literal $(, $( $rest:tt )* )?) => {
        $crate::be_buffer_add!($builder.push($item) $(, $( $rest )* )?)
    };
    ($builder:expr, $item:ident $(, $( $rest:tt )* )?) => {
        $crate::be_buffer_add!($builder.push($item) $(, $( $rest )* )?)
    };
    ($builder:expr, ($item:expr) $(, $( $rest:tt )* )?) => {
        $crate::be_buffer_add!($builder.push($item) $(, $( $rest )* )?)
    };
    ($builder:expr, [$( $item:expr ),* $(,)?] $(, $( $rest:tt )* )?) => {
        $crate::be_buffer_add!($builder $( .push($item) )* $(, $( $rest )* )?)
    };
}
