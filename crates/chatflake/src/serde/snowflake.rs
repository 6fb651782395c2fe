use crate::{SNOWFLAKE_JSON_TYPE, Snowflake, UnmarshalTypeError, json::decode_text};
use core::fmt;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

impl Serialize for Snowflake {
    /// Serializes as a native `i64`, i.e. a bare JSON number.
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_i64(self.to_raw())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    /// Deserializes from either an integer or a string holding a base-10
    /// integer. An empty string yields [`Snowflake::ZERO`].
    ///
    /// # Errors
    ///
    /// Any other value, or an integer outside the `i64` range, fails with an
    /// [`UnmarshalTypeError`] message.
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_any(SnowflakeVisitor)
    }
}

struct SnowflakeVisitor;

fn mismatch<E: de::Error>(value: impl fmt::Display) -> E {
    E::custom(UnmarshalTypeError::new(
        value.to_string(),
        SNOWFLAKE_JSON_TYPE,
    ))
}

impl Visitor<'_> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string containing a base-10 integer")
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Snowflake::from_raw(v))
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(Snowflake::from_raw)
            .map_err(|_| mismatch(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(mismatch(v))
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(mismatch(v))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Err(mismatch("null"))
    }

    /// The token is rebuilt from the unescaped string, so quotes and control
    /// characters are re-escaped in the reported value.
    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        decode_text(v, || format!("{v:?}")).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NIL;
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Message {
        #[serde(default)]
        snowflake: Snowflake,
    }

    const RAW: i64 = 829_388_262_825_132_092;

    #[test]
    fn deserialize_from_number() {
        let msg: Message =
            serde_json::from_str(r#"{"snowflake": 829388262825132092}"#).expect("number");
        assert_eq!(msg.snowflake, Snowflake::from_raw(RAW));
    }

    #[test]
    fn deserialize_from_string() {
        let msg: Message =
            serde_json::from_str(r#"{"snowflake": "829388262825132092"}"#).expect("string");
        assert_eq!(msg.snowflake, Snowflake::from_raw(RAW));
    }

    #[test]
    fn deserialize_negative_number() {
        let id: Snowflake = serde_json::from_value(json!(-7)).expect("negative");
        assert_eq!(id, Snowflake::from_raw(-7));
    }

    #[test]
    fn deserialize_empty_string_is_zero() {
        let msg: Message = serde_json::from_str(r#"{"snowflake": ""}"#).expect("empty");
        assert_eq!(msg.snowflake, Snowflake::ZERO);
    }

    #[test]
    fn missing_field_defaults_to_zero() {
        let msg: Message = serde_json::from_str("{}").expect("missing");
        assert_eq!(msg.snowflake, Snowflake::ZERO);
    }

    #[test]
    fn deserialize_rejects_bool() {
        let err = serde_json::from_str::<Message>(r#"{"snowflake": true}"#).expect_err("bool");
        assert!(
            err.to_string()
                .starts_with("cannot unmarshal true into value of type int or string"),
            "{err}"
        );
    }

    #[test]
    fn deserialize_rejects_non_numeric_string() {
        let err = serde_json::from_value::<Snowflake>(json!("abc")).expect_err("text");
        assert_eq!(
            err.to_string(),
            r#"cannot unmarshal "abc" into value of type int or string"#
        );
    }

    #[test]
    fn rejected_string_is_reported_escaped() {
        let err = serde_json::from_str::<Snowflake>(r#""a\"b""#).expect_err("text");
        assert!(
            err.to_string()
                .starts_with(r#"cannot unmarshal "a\"b" into value of type int or string"#),
            "{err}"
        );
    }

    #[test]
    fn deserialize_rejects_out_of_range_and_fractions() {
        let err = serde_json::from_value::<Snowflake>(json!(u64::MAX)).expect_err("u64::MAX");
        assert_eq!(
            err.to_string(),
            "cannot unmarshal 18446744073709551615 into value of type int or string"
        );

        let err = serde_json::from_value::<Snowflake>(json!(1.5)).expect_err("float");
        assert_eq!(
            err.to_string(),
            "cannot unmarshal 1.5 into value of type int or string"
        );

        let err = serde_json::from_value::<Snowflake>(json!("9223372036854775808"))
            .expect_err("overflowing string");
        assert!(err.to_string().contains("int or string"));
    }

    #[test]
    fn deserialize_rejects_null_and_containers() {
        assert!(serde_json::from_value::<Snowflake>(json!(null)).is_err());
        assert!(serde_json::from_value::<Snowflake>(json!([1])).is_err());
        assert!(serde_json::from_value::<Snowflake>(json!({"id": 1})).is_err());
    }

    #[test]
    fn optional_snowflake_distinguishes_null_from_zero() {
        let absent: Option<Snowflake> = serde_json::from_value(json!(null)).expect("null");
        assert_eq!(absent, NIL);

        let zero: Option<Snowflake> = serde_json::from_value(json!(0)).expect("zero");
        assert_eq!(zero, Some(Snowflake::ZERO));
    }

    #[test]
    fn serialize_as_bare_number() {
        let msg = Message {
            snowflake: Snowflake::from_raw(RAW),
        };
        let json = serde_json::to_string(&msg).expect("serialize");
        assert_eq!(json, r#"{"snowflake":829388262825132092}"#);
        let back: Message = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, msg);
    }

    #[test]
    fn serialize_matches_marshal_json() {
        let id = Snowflake::from_raw(-RAW);
        let json = serde_json::to_vec(&id).expect("serialize");
        assert_eq!(json, id.marshal_json());
    }
}
