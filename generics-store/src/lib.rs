pub use crate::collections::{map_map, slice_dedup, slice_dedup_key, slice_map};
pub use crate::stack::Stack;

pub mod collections;
pub mod stack;
