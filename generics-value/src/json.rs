//! Json encoding and decoding.
//!
//! Thin wrappers around `serde_json` that report failures as [`Error`].
//! ```
//! # use generics_value::{json, Null};
//! let text = json::to_string(&vec![Null::new(1), Null::empty()]).unwrap();
//! assert_eq!("[1,null]", text);
//!
//! let values: Vec<Null<i32>> = json::from_str(&text).unwrap();
//! assert_eq!(vec![Null::new(1), Null::empty()], values);
//! ```
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Encode a value as json
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let text = serde_json::to_string(value).map_err(Error::Encode)?;
    #[cfg(feature = "logging")]
    log::trace!("encoded {} bytes of json", text.len());
    Ok(text)
}

/// Decode a value from json.
///
/// Any input that is not valid json for `T` is reported as [`Error::Decode`].
pub fn from_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    #[cfg(feature = "logging")]
    log::trace!("decoding {} bytes of json", text.len());
    serde_json::from_str(text).map_err(Error::Decode)
}
