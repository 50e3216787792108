mod errors;
mod sequence;

pub use errors::*;
pub use sequence::Sequence;
