use core::alloc::Layout;
use core::mem::align_of;
use core::mem::size_of;
use core::ptr;
use core::ptr::NonNull;

use crate::heap::AltAllocator;
use crate::heap::Global;
use crate::types::DynArrResult;
use crate::types::ErrorKind;

pub(super) fn layout_array(layout: Layout, length: usize) -> DynArrResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(ErrorKind::UsizeOverflow.into());
    };
    // Also rejects anything over isize::MAX.
    let Ok(lay) = Layout::from_size_align(len, layout.align()) else {
        return Err(ErrorKind::LayoutFailure.into());
    };
    return Ok(lay);
}

/// The buffer half of a `DynArr`. It owns the allocation but knows nothing
/// about which slots are initialized, so it never drops a `T`.
pub(crate) struct Inner<T> {
    ptr:      NonNull<T>,
    capacity: usize,
}

impl<T> Inner<T> {
    const IS_ZST: bool = size_of::<T>() == 0;
    const LAYOUT: Layout = Layout::new::<T>();

    pub(crate) const fn new() -> Self {
        return Self {
            ptr:      NonNull::dangling(),
            capacity: 0,
        };
    }

    pub(crate) fn with_capacity(capacity: usize) -> DynArrResult<Self> {
        let mut inner = Self::new();
        // Nothing is live yet so there is nothing to move.
        unsafe { inner.reallocate(capacity, 0)? };
        return Ok(inner);
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn get_ptr(&self) -> *mut T {
        return self.ptr.as_ptr();
    }

    /// Swaps the current buffer for one holding exactly `new_cap` slots and
    /// moves the first `len` elements over.
    ///
    /// The old buffer is only released once the new one is populated, so on
    /// error `self` is untouched.
    ///
    /// # Safety
    /// `len` must not exceed `new_cap` or the current capacity, and the first
    /// `len` slots must be initialized.
    pub(crate) unsafe fn reallocate(&mut self, new_cap: usize, len: usize) -> DynArrResult<()> {
        debug_assert!(len <= new_cap && len <= self.capacity);

        // Zero sized types have no backing memory.
        if Self::IS_ZST {
            self.capacity = new_cap;
            return Ok(());
        }

        let new_ptr = if new_cap == 0 {
            NonNull::dangling()
        } else {
            let layout = layout_array(Self::LAYOUT, new_cap)?;
            let Ok(mem) = Global.allocate(layout) else {
                return Err(ErrorKind::AllocFailure.into());
            };
            let new_ptr = mem.cast::<T>();
            unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len) };
            new_ptr
        };

        unsafe { self.release() };
        self.ptr = new_ptr;
        self.capacity = new_cap;
        return Ok(());
    }

    unsafe fn release(&mut self) {
        if Self::IS_ZST || self.capacity == 0 {
            return;
        }
        // Same layout that `layout_array` produced when this was allocated.
        let size = size_of::<T>() * self.capacity;
        let layout = unsafe { Layout::from_size_align_unchecked(size, align_of::<T>()) };
        unsafe { Global.deallocate(self.ptr.cast(), layout) };
    }
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        unsafe { self.release() };
    }
}
