use std::fmt::Display;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A failure described by a message
    #[error("{0}")]
    Failed(String),

    /// A value could not be encoded as json
    #[cfg(feature = "serde-json")]
    #[error("failed to encode json: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input is not valid json for the target type
    #[cfg(feature = "serde-json")]
    #[error("failed to decode json: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// Create a failure from anything that can be displayed
    pub fn msg(cause: impl Display) -> Self {
        Self::Failed(cause.to_string())
    }
}

impl PartialEq for Error {
    /// Failures are equal when their messages are.
    /// Json errors carry no comparable state and are never equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Failed(lhs), Self::Failed(rhs)) => lhs == rhs,
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }
}
