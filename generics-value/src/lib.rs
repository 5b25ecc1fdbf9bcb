pub use crate::error::Error;
pub use crate::null::{Null, Nullable};
pub use crate::result::{Result, and_then, failure, success};

mod error;
#[cfg(feature = "serde-json")]
pub mod json;
pub mod null;
pub mod result;
