use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;

/// The allocation seam `DynArr` is written against. It mirrors the
/// allocate/deallocate half of the unstable allocator API:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
///
/// Implementors must return memory that is valid for `layout` and stays
/// valid until passed back to `deallocate` with the same layout.
pub(crate) unsafe trait AltAllocator {
    /// Allocates a chunk of memory with the given layout.
    ///
    /// Zero sized layouts are an error, callers never need them since
    /// zero sized element types are not backed by memory.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Deallocates the chunk of memory pointed at by `ptr`
    ///
    /// This memory must have only been allocated by this allocator.
    /// The layout must match the layout provided when the chunk was
    /// allocated.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}
