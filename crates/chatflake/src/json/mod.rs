mod error;
mod scalar;

pub use error::*;
#[cfg(feature = "serde")]
pub(crate) use scalar::decode_text;
