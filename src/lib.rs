pub use {
    generics_store as store, // store
    generics_value as value, // value
};

pub mod prelude {
    pub use crate::store::{Stack, map_map, slice_dedup, slice_dedup_key, slice_map};
    pub use crate::value::{Error, Null, Nullable, Result, and_then, failure, success};
}
