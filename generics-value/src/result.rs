//! Success or failure.
//!
//! A result is either a success carrying a value, or a failure carrying an error.
//! Chaining with [`and_then`] stops at the first failure and hands that failure
//! back unchanged.
//! ```
//! # use generics_value::{Error, and_then, failure, success};
//! let output = and_then(success::<_, Error>(23), |x| success(format!("Hello {x}")));
//! assert_eq!(Ok("Hello 23".to_string()), output);
//!
//! let output = and_then(failure::<i32, _>(Error::msg("some error")), |x| success(x + 1));
//! assert_eq!(Err(Error::msg("some error")), output);
//! ```

pub type Result<T, E = crate::Error> = std::result::Result<T, E>;

/// A successful result
pub fn success<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// A failed result
pub fn failure<T, E>(err: E) -> Result<T, E> {
    Err(err)
}

/// Pass the value of a successful result to `f`.
///
/// If the result is a failure `f` is never called and
/// the error is returned as is.
pub fn and_then<X, Y, E, F>(result: Result<X, E>, f: F) -> Result<Y, E>
where
    F: FnOnce(X) -> Result<Y, E>,
{
    match result {
        Ok(value) => f(value),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use super::*;
    use crate::Error;

    fn build_string(x: i32) -> Result<String> {
        success(format!("Hello {x}"))
    }

    #[test]
    fn chain_success() {
        let output = and_then(success(23), build_string);
        assert_eq!(Ok("Hello 23".to_string()), output);
    }

    #[test]
    fn chain_failure_is_not_called() {
        let calls = Cell::new(0);
        let output = and_then(failure::<i32, _>(Error::msg("some error")), |x| {
            calls.set(calls.get() + 1);
            build_string(x)
        });

        assert_eq!(Err(Error::msg("some error")), output);
        assert_eq!(0, calls.get());
    }

    #[test]
    fn failure_propagates_through_chain() {
        let calls = Cell::new(0);
        let count = |x: i32| {
            calls.set(calls.get() + 1);
            success(x + 1)
        };

        let output = and_then(success::<_, Error>(1), count);
        let output = and_then(output, |_| failure::<i32, _>(Error::msg("stop")));
        let output = and_then(output, count);
        let output = and_then(output, count);

        assert_eq!(Err(Error::msg("stop")), output);
        assert_eq!(1, calls.get());
    }

    #[test]
    fn step_can_fail() {
        let output: Result<u8, &str> = and_then(success(300), |x: u32| u8::try_from(x).map_err(|_| "too large"));
        assert_eq!(Err("too large"), output);
    }
}
