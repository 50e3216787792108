use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::mem::size_of;
use core::ops::Index;
use core::ops::IndexMut;
use core::ptr;
use core::slice;

use super::inner::Inner;
use super::iter::Iter;
use super::iter::IterMut;
use crate::types::DynArrErr;
use crate::types::DynArrResult;
use crate::types::ErrorKind;
use crate::types::Sequence;

/// A contiguous growable array.
///
/// Unlike `Vec`, all allocations are fallible and growth only happens
/// through `reserve`. Indexing is always bounds checked: `at` returns an
/// error, and `[]` panics with the same error.
pub struct DynArr<T> {
    pub(super) inner: Inner<T>,
    pub(super) len:   usize,
    _ph:              PhantomData<T>,
}

unsafe impl<T: Send> Send for DynArr<T> {}
unsafe impl<T: Sync> Sync for DynArr<T> {}

impl<T> DynArr<T> {
    const SIZE: usize = size_of::<T>();

    /// Creates an empty array. Nothing is allocated.
    pub const fn new() -> Self {
        return Self {
            inner: Inner::new(),
            len:   0,
            _ph:   PhantomData,
        };
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> DynArrResult<Self> {
        if capacity > Self::max_size_of() {
            return Err(ErrorKind::CapacityExceeded.into());
        }
        return Ok(Self {
            inner: Inner::with_capacity(capacity)?,
            len:   0,
            _ph:   PhantomData,
        });
    }

    const fn max_size_of() -> usize {
        if Self::SIZE == 0 {
            return usize::MAX;
        }
        return usize::MAX / Self::SIZE / 2;
    }

    /// Upper bound on the capacity an array of `T` can request.
    #[inline]
    pub const fn max_size(&self) -> usize {
        return Self::max_size_of();
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.inner.capacity();
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Fails with `ErrorKind::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> DynArrResult<&T> {
        if index >= self.len {
            return Err(ErrorKind::OutOfRange.into());
        }
        return Ok(unsafe { &*self.as_ptr().add(index) });
    }

    /// Mutable counterpart of `at`.
    pub fn at_mut(&mut self, index: usize) -> DynArrResult<&mut T> {
        if index >= self.len {
            return Err(ErrorKind::OutOfRange.into());
        }
        return Ok(unsafe { &mut *self.as_mut_ptr().add(index) });
    }

    /// The first element, or `ErrorKind::EmptyContainer`.
    pub fn front(&self) -> DynArrResult<&T> {
        if self.len == 0 {
            return Err(ErrorKind::EmptyContainer.into());
        }
        return Ok(unsafe { &*self.as_ptr() });
    }

    pub fn front_mut(&mut self) -> DynArrResult<&mut T> {
        if self.len == 0 {
            return Err(ErrorKind::EmptyContainer.into());
        }
        return Ok(unsafe { &mut *self.as_mut_ptr() });
    }

    /// The last element, or `ErrorKind::EmptyContainer`.
    pub fn back(&self) -> DynArrResult<&T> {
        if self.len == 0 {
            return Err(ErrorKind::EmptyContainer.into());
        }
        return Ok(unsafe { &*self.as_ptr().add(self.len - 1) });
    }

    pub fn back_mut(&mut self) -> DynArrResult<&mut T> {
        if self.len == 0 {
            return Err(ErrorKind::EmptyContainer.into());
        }
        let last = self.len - 1;
        return Ok(unsafe { &mut *self.as_mut_ptr().add(last) });
    }

    /// Ensures the capacity is at least `new_cap`, reallocating to exactly
    /// `new_cap` slots if it is not.
    ///
    /// Fails with `ErrorKind::CapacityExceeded` if `new_cap > max_size()`.
    /// The array is unchanged on any failure. A successful reallocation
    /// invalidates pointers obtained from `as_ptr`.
    pub fn reserve(&mut self, new_cap: usize) -> DynArrResult<()> {
        if new_cap <= self.capacity() {
            return Ok(());
        }
        if new_cap > self.max_size() {
            return Err(ErrorKind::CapacityExceeded.into());
        }
        return unsafe { self.inner.reallocate(new_cap, self.len) };
    }

    /// Reallocates so that `capacity() == len()`.
    pub fn shrink_to_fit(&mut self) -> DynArrResult<()> {
        if self.len == self.capacity() {
            return Ok(());
        }
        return unsafe { self.inner.reallocate(self.len, self.len) };
    }

    fn grow(&mut self) -> DynArrResult<()> {
        let cap = self.capacity();
        let max = self.max_size();
        if cap >= max {
            return Err(ErrorKind::CapacityExceeded.into());
        }
        let new_cap = if cap == 0 { 1 } else { cap.saturating_mul(2).min(max) };
        return self.reserve(new_cap);
    }

    /// Writes `item` into the first free slot.
    ///
    /// # Safety
    /// `len()` must be less than `capacity()`.
    unsafe fn push_unchecked(&mut self, item: T) {
        debug_assert!(self.len < self.capacity());
        let len = self.len;
        unsafe { ptr::write(self.as_mut_ptr().add(len), item) };
        self.len += 1;
    }

    /// Appends `item`, doubling the capacity first if the array is full.
    pub fn push_back(&mut self, item: T) -> DynArrResult<()> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        unsafe { self.push_unchecked(item) };
        return Ok(());
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let ret = unsafe { ptr::read(self.as_ptr().add(self.len)) };
        return Some(ret);
    }

    /// Removes the first element and shifts the rest down by one.
    ///
    /// Fails with `ErrorKind::EmptyContainer` on an empty array.
    pub fn pop_front(&mut self) -> DynArrResult<T> {
        if self.len == 0 {
            return Err(ErrorKind::EmptyContainer.into());
        }
        let base = self.as_mut_ptr();
        let ret = unsafe { ptr::read(base) };
        unsafe { ptr::copy(base.add(1), base, self.len - 1) };
        self.len -= 1;
        return Ok(ret);
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), self.len);
        // Length goes first so a panicking destructor can't cause a double drop.
        self.len = 0;
        unsafe { ptr::drop_in_place(live) };
    }

    /// Moves the contents out, leaving `self` empty with no allocation.
    pub fn take(&mut self) -> Self {
        return mem::take(self);
    }

    /// Releases the current contents and takes over those of `source`,
    /// which is left empty.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return unsafe { slice::from_raw_parts(self.as_ptr(), self.len) };
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        return unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) };
    }

    /// Base pointer of the buffer. Dangling, but never null, when nothing is allocated.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.inner.get_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        return self.inner.get_ptr();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        return Iter::new(self.as_slice());
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        return IterMut::new(self.as_mut_slice());
    }
}

impl<T: Default> DynArr<T> {
    /// Creates an array of `len` default values, with `capacity() == len`.
    pub fn with_len(len: usize) -> DynArrResult<Self> {
        let mut arr = Self::with_capacity(len)?;
        for _ in 0..len {
            unsafe { arr.push_unchecked(T::default()) };
        }
        return Ok(arr);
    }
}

impl<T: Clone> DynArr<T> {
    /// Creates an array holding a copy of each item, with `capacity() == items.len()`.
    pub fn from_slice(items: &[T]) -> DynArrResult<Self> {
        let mut arr = Self::with_capacity(items.len())?;
        for item in items {
            unsafe { arr.push_unchecked(item.clone()) };
        }
        return Ok(arr);
    }

    /// Deep copy with the same capacity as `self`.
    pub fn try_clone(&self) -> DynArrResult<Self> {
        let mut arr = Self::with_capacity(self.capacity())?;
        for item in self.iter() {
            unsafe { arr.push_unchecked(item.clone()) };
        }
        return Ok(arr);
    }
}

impl<T> Drop for DynArr<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> Default for DynArr<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Clone> Clone for DynArr<T> {
    /// # Panics
    /// If the allocation fails.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(arr) => return arr,
            Err(e) => panic!("{}", e),
        }
    }
}

fn index_failed(err: DynArrErr, index: usize, len: usize) -> ! {
    panic!("{} index: {}, len: {}", err, index, len);
}

impl<T> Index<usize> for DynArr<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len;
        match self.at(index) {
            Ok(item) => return item,
            Err(e) => index_failed(e, index, len),
        }
    }
}

impl<T> IndexMut<usize> for DynArr<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.at_mut(index) {
            Ok(item) => return item,
            Err(e) => index_failed(e, index, len),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynArr<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq> Eq for DynArr<T> {}

impl<T> AsRef<[T]> for DynArr<T> {
    fn as_ref(&self) -> &[T] {
        return self.as_slice();
    }
}

impl<T> AsMut<[T]> for DynArr<T> {
    fn as_mut(&mut self) -> &mut [T] {
        return self.as_mut_slice();
    }
}

impl<'a, T> IntoIterator for &'a DynArr<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<'a, T> IntoIterator for &'a mut DynArr<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        return self.iter_mut();
    }
}

impl<T> Sequence for DynArr<T> {
    type Item = T;

    fn push_back(&mut self, value: T) -> DynArrResult<()> {
        return DynArr::push_back(self, value);
    }
    fn pop_front(&mut self) -> DynArrResult<T> {
        return DynArr::pop_front(self);
    }
    fn front(&self) -> DynArrResult<&T> {
        return DynArr::front(self);
    }
    fn back(&self) -> DynArrResult<&T> {
        return DynArr::back(self);
    }
    fn is_empty(&self) -> bool {
        return DynArr::is_empty(self);
    }
    fn len(&self) -> usize {
        return DynArr::len(self);
    }
}
