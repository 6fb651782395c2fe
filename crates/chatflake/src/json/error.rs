use core::fmt;

/// The type description reported when a JSON scalar is not a snowflake.
pub const SNOWFLAKE_JSON_TYPE: &str = "int or string";

/// A JSON value that could not be converted into the requested type.
///
/// Mirrors the usual "cannot unmarshal X into Y" decoder diagnostic, but
/// names the target type with a plain string. The struct and field context is
/// empty when raised by the scalar codec; a decoder that knows which field it
/// was filling attaches it with [`Self::with_struct_name`] and
/// [`Self::with_field`].
///
/// ```
/// use chatflake::Snowflake;
///
/// let err = Snowflake::unmarshal_json(b"true")
///     .unwrap_err()
///     .with_struct_name("Message")
///     .with_field("channel_id");
/// assert_eq!(
///     err.to_string(),
///     r#"cannot unmarshal true into struct field "Message"."channel_id" of type int or string"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnmarshalTypeError {
    value: String,
    struct_name: String,
    field: String,
    typ: String,
}

impl UnmarshalTypeError {
    /// Creates an error without struct or field context.
    pub fn new(value: impl Into<String>, typ: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            typ: typ.into(),
            ..Self::default()
        }
    }

    /// Sets the name of the struct being decoded.
    #[must_use]
    pub fn with_struct_name(mut self, struct_name: impl Into<String>) -> Self {
        self.struct_name = struct_name.into();
        self
    }

    /// Sets the name of the field being decoded.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// The raw text of the value that failed to convert.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The enclosing struct name, empty if unknown.
    pub fn struct_name(&self) -> &str {
        &self.struct_name
    }

    /// The field name, empty if unknown.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The expected type description, e.g. [`SNOWFLAKE_JSON_TYPE`].
    pub fn typ(&self) -> &str {
        &self.typ
    }
}

impl fmt::Display for UnmarshalTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.struct_name.is_empty() || !self.field.is_empty() {
            write!(
                f,
                "cannot unmarshal {} into struct field \"{}\".\"{}\" of type {}",
                self.value, self.struct_name, self.field, self.typ
            )
        } else {
            write!(
                f,
                "cannot unmarshal {} into value of type {}",
                self.value, self.typ
            )
        }
    }
}

impl core::error::Error for UnmarshalTypeError {}
