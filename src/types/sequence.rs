use super::DynArrResult;

/// The operations a queue style adaptor needs from the sequence it wraps.
///
/// `front`, `back` and `pop_front` fail with `ErrorKind::EmptyContainer`
/// when the sequence is empty.
pub trait Sequence {
    type Item;

    fn push_back(&mut self, value: Self::Item) -> DynArrResult<()>;
    fn pop_front(&mut self) -> DynArrResult<Self::Item>;
    fn front(&self) -> DynArrResult<&Self::Item>;
    fn back(&self) -> DynArrResult<&Self::Item>;
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;

    /// Appends every value in order, as repeated calls to `push_back` would.
    ///
    /// Stops at the first value that could not be appended. Values appended
    /// before the failure stay in the sequence.
    fn insert_many_back<I>(&mut self, values: I) -> DynArrResult<()>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for value in values {
            self.push_back(value)?;
        }
        return Ok(());
    }
}
