use core::alloc::Layout;
use core::ptr::NonNull;

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global as Api2Global;

use super::AllocError;
use super::AltAllocator;

/// Forwards to the `Global` allocator of the `allocator-api2` crate.
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct Global;

unsafe impl AltAllocator for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Err(AllocError);
        }
        let Ok(mem) = Api2Global.allocate(layout) else {
            return Err(AllocError);
        };
        return Ok(mem.cast());
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { Api2Global.deallocate(ptr, layout) };
    }
}
