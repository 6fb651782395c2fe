use crate::UnmarshalTypeError;
use core::num::ParseIntError;

/// A result type defaulting to the crate [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `chatflake` can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The text was non-empty and not a base-10 `i64` literal.
    #[error("invalid snowflake {text:?}: {source}")]
    InvalidDecimalText {
        /// The offending input.
        text: String,
        /// The underlying integer conversion failure.
        #[source]
        source: ParseIntError,
    },

    /// A JSON scalar could not be decoded into a snowflake.
    #[error(transparent)]
    Unmarshal(#[from] UnmarshalTypeError),
}
