//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec optimized for tie-groups (usually <4 members).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
