use crate::{Result, SNOWFLAKE_JSON_TYPE, Snowflake, UnmarshalTypeError};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Parses the unquoted text of a JSON scalar. `token` renders the original
/// token and is only called on failure.
pub(crate) fn decode_text(
    text: &str,
    token: impl FnOnce() -> String,
) -> Result<Snowflake, UnmarshalTypeError> {
    if text.is_empty() {
        return Ok(Snowflake::ZERO);
    }
    text.parse::<i64>()
        .map(Snowflake::from_raw)
        .map_err(|_| UnmarshalTypeError::new(token(), SNOWFLAKE_JSON_TYPE))
}

impl Snowflake {
    /// Decodes the raw bytes of a single JSON scalar token.
    ///
    /// Both a bare number (`123`) and a quoted string (`"123"`) are accepted.
    /// An empty string (`""`) decodes to [`Snowflake::ZERO`].
    ///
    /// # Errors
    ///
    /// Returns an [`UnmarshalTypeError`] carrying the unstripped token when
    /// the contents are not a base-10 `i64` literal, e.g. `true`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    pub fn unmarshal_json(token: &[u8]) -> Result<Self, UnmarshalTypeError> {
        let inner = match token {
            [b'"', inner @ .., b'"'] => inner,
            _ => token,
        };
        let lossy = || String::from_utf8_lossy(token).into_owned();
        match core::str::from_utf8(inner) {
            Ok(text) => decode_text(text, lossy),
            Err(_) => Err(UnmarshalTypeError::new(lossy(), SNOWFLAKE_JSON_TYPE)),
        }
    }

    /// Encodes this snowflake as a bare JSON number token.
    ///
    /// The numeric form is always used, whatever the magnitude.
    pub fn marshal_json(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}
