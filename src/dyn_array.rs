mod array;
mod inner;
mod iter;

pub use array::DynArr;
pub use iter::Iter;
pub use iter::IterMut;
