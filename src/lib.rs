//! # Dynamic Array
//!
//! The `dyn_array` crate provides a `#[no_std]` growable array, `DynArr`, much like `std::Vec`
//! but with a stricter contract.
//!
//! Every operation that can fail returns a `DynArrResult` instead of panicking, including
//! allocation. Indexing with `at` is bounds checked and so is `[]`, which panics with the
//! same `OutOfRange` error `at` would return. Capacity only changes through `reserve`,
//! `shrink_to_fit` and `push_back`, which doubles the capacity when the array is full.
//!
//! `DynArr` also implements the `Sequence` trait, the set of operations a queue style
//! adaptor needs from the storage it wraps.
//!
//! ```
//! use dyn_array::DynArr;
//! use dyn_array::types::ErrorKind;
//!
//! let mut arr = DynArr::from_slice(&[1, 2, 3]).unwrap();
//! assert_eq!(arr.capacity(), 3);
//! assert_eq!(arr.at(5).unwrap_err().kind(), ErrorKind::OutOfRange);
//!
//! arr.push_back(4).unwrap();
//! assert_eq!(arr.capacity(), 6);
//! assert_eq!(*arr.back().unwrap(), 4);
//! ```
//!
//! # Feature Flags
//! * `alloc_api2` - Allocate through `allocator_api2::alloc::Global` instead of the
//! `alloc` crate's global allocator functions.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod dyn_array;
mod heap;
pub mod types;

pub use dyn_array::DynArr;
pub use dyn_array::Iter;
pub use dyn_array::IterMut;
