//! Projection strategies: the four ways a source tree is materialized
//! into a generated representation.

mod concat;
mod flatten;
mod merge;
mod restructure;

pub use concat::concatenate;
pub use flatten::flatten_and_number;
pub use merge::merge_non_destructive;
pub use restructure::restructure_and_strip;
