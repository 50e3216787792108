//! The allocation backend used by `DynArr`, the `AltAllocator` trait and the `AllocError` type.
//!
//! By default memory comes from the `alloc` crate's global allocator. If built with the
//! `alloc_api2` feature, `Global` instead forwards to `allocator_api2::alloc::Global`.

mod alt_alloc;
#[cfg(feature = "alloc_api2")]
mod alloc_api2;
#[cfg(not(feature = "alloc_api2"))]
mod global;

#[cfg(feature = "alloc_api2")]
pub(crate) use alloc_api2::Global;
pub(crate) use alt_alloc::AltAllocator;
#[cfg(not(feature = "alloc_api2"))]
pub(crate) use global::Global;

/// This indicates some sort of memory allocation error from the backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct AllocError;
