//! Discord-layout Snowflake identifiers.
//!
//! A [`Snowflake`] packs a millisecond timestamp (relative to
//! [`DISCORD_EPOCH`]), a worker id, a process id and a per-process increment
//! into a single signed 64-bit integer. This crate only decodes and encodes
//! existing values; it does not mint new ones.
//!
//! ```
//! use chatflake::Snowflake;
//!
//! let id = Snowflake::must_parse("829388262825132092");
//! assert_eq!(id.to_string(), "829388262825132092");
//! assert_eq!(Snowflake::unmarshal_json(br#""829388262825132092""#), Ok(id));
//! assert_eq!(id.marshal_json(), b"829388262825132092");
//! ```
mod error;
mod id;
mod json;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::error::*;
pub use crate::id::*;
pub use crate::json::*;
pub use crate::time::*;
