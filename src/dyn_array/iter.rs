use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

/// Immutable iterator over the elements of a `DynArr`.
///
/// Holds a raw position into the buffer. The borrow of the array keeps it
/// from being reallocated while the iterator lives.
pub struct Iter<'a, T> {
    ptr: NonNull<T>,
    len: usize,
    _ph: PhantomData<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        return Self {
            ptr: NonNull::from(items).cast(),
            len: items.len(),
            _ph: PhantomData,
        };
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &'a [T] {
        return unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) };
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let item = unsafe { self.ptr.as_ref() };
        self.ptr = unsafe { self.ptr.add(1) };
        self.len -= 1;
        return Some(item);
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.len, Some(self.len));
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        return Some(unsafe { self.ptr.add(self.len).as_ref() });
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        return Self {
            ptr: self.ptr,
            len: self.len,
            _ph: PhantomData,
        };
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// Mutable iterator over the elements of a `DynArr`.
pub struct IterMut<'a, T> {
    ptr: NonNull<T>,
    len: usize,
    _ph: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T]) -> Self {
        let len = items.len();
        return Self {
            ptr: NonNull::from(items).cast(),
            len: len,
            _ph: PhantomData,
        };
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        // Each slot is handed out at most once.
        let item = unsafe { self.ptr.as_mut() };
        self.ptr = unsafe { self.ptr.add(1) };
        self.len -= 1;
        return Some(item);
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.len, Some(self.len));
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        return Some(unsafe { self.ptr.add(self.len).as_mut() });
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish()
    }
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
