use core::error::Error;
use core::fmt;

/// This enum lets one figure out what kind of error occurred durning
/// a `DynArr` operation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An index was not less than the length.
    OutOfRange = 1,
    /// An element was requested from an empty array.
    EmptyContainer,
    /// The requested capacity is larger than `max_size()`.
    CapacityExceeded,
    /// A size computation overflowed `usize`.
    UsizeOverflow,
    /// The buffer size does not form a valid `Layout`.
    LayoutFailure,
    /// The allocator could not provide the memory.
    AllocFailure,
}

/// A type alias for `Result<T, DynArrErr>`
pub type DynArrResult<T> = Result<T, DynArrErr>;

/// This is used to indicate an error during a `DynArr` operation.
///
/// A failed operation never modifies the array.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DynArrErr(ErrorKind);

impl DynArrErr {
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        return Self(kind);
    }
    pub const fn kind(self) -> ErrorKind {
        return self.0;
    }
}

impl From<ErrorKind> for DynArrErr {
    fn from(kind: ErrorKind) -> Self {
        return Self::new(kind);
    }
}

impl Error for DynArrErr {}

impl fmt::Display for DynArrErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorKind::OutOfRange => f.write_str("Index out of range."),
            ErrorKind::EmptyContainer => f.write_str("The array is empty."),
            ErrorKind::CapacityExceeded => f.write_str("Requested capacity exceeds max_size()."),
            ErrorKind::UsizeOverflow => f.write_str("usize overflowed."),
            ErrorKind::LayoutFailure => f.write_str("Failed to create layout."),
            ErrorKind::AllocFailure => f.write_str("An allocation failure occurred."),
        }
    }
}
