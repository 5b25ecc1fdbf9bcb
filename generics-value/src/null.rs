//! A value that may or may not be present.
//!
//! [`Null`] is transparent when serialized: an empty value is written as the
//! format's null token, a present value is written as the payload itself.
//! ```
//! # use generics_value::Null;
//! let name = Null::new("quang tung");
//! assert_eq!(Null::new(10), name.map(str::len));
//!
//! let name = Null::<&str>::empty();
//! assert_eq!(Null::empty(), name.map(str::len));
//! ```

/// Either empty or holding a value of `T`.
///
/// An empty `Null` is never the same as a `Null` holding an empty `T`:
/// `Null::new(String::new())` is present.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Null<T> {
    Empty,
    Present(T),
}

/// Alias for [`Null`]
pub type Nullable<T> = Null<T>;

impl<T> Null<T> {
    /// An empty value
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// A present value
    pub const fn new(value: T) -> Self {
        Self::Present(value)
    }

    /// Same as [`Null::new`]
    pub const fn of(value: T) -> Self {
        Self::new(value)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Apply `f` to the value if present.
    /// `f` is not called on an empty value.
    pub fn map<F, U>(self, f: F) -> Null<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Null::Present(f(value)),
            Self::Empty => Null::Empty,
        }
    }

    /// Apply `f` to the value if present, where `f` can itself produce an empty value.
    /// `f` is not called on an empty value.
    pub fn and_then<F, U>(self, f: F) -> Null<U>
    where
        F: FnOnce(T) -> Null<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Empty => Null::Empty,
        }
    }

    pub fn as_ref(&self) -> Null<&T> {
        match self {
            Self::Present(value) => Null::Present(value),
            Self::Empty => Null::Empty,
        }
    }

    pub fn as_mut(&mut self) -> Null<&mut T> {
        match self {
            Self::Present(value) => Null::Present(value),
            Self::Empty => Null::Empty,
        }
    }

    /// A reference to the value, if present
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Take the value out, leaving an empty value in its place
    pub fn take(&mut self) -> Null<T> {
        std::mem::replace(self, Self::Empty)
    }

    /// The value if present, otherwise `default`
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// The value.
    ///
    /// # Panics
    ///
    /// Panics if the value is empty.
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect("called `Null::unwrap()` on an empty value")
    }

    /// The value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is empty.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => panic!("{msg}"),
        }
    }
}

impl<T> Default for Null<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Null<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(val) => Self::Present(val),
            None => Self::Empty,
        }
    }
}

impl<T> From<Null<T>> for Option<T> {
    fn from(value: Null<T>) -> Self {
        value.into_option()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Null;

    impl<T: Serialize> Serialize for Null<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Null::Present(value) => value.serialize(serializer),
                Null::Empty => serializer.serialize_none(),
            }
        }
    }

    // The null token always decodes as empty, anything else is handed to `T`.
    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Null<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Option::<T>::deserialize(deserializer).map(Null::from)
        }
    }
}
