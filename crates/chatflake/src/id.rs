use crate::{DISCORD_EPOCH_MILLIS, Error, Result, time};
use core::{fmt, str::FromStr};
use std::time::SystemTime;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// The "absent" snowflake.
///
/// Kept distinct from [`Snowflake::ZERO`], which is a present value that
/// happens to be zero.
pub const NIL: Option<Snowflake> = None;

/// A 64-bit Snowflake ID using the Discord layout
///
/// - 42 bits timestamp (ms since [`DISCORD_EPOCH`])
/// - 5 bits worker ID
/// - 5 bits process ID
/// - 12 bits increment
///
/// ```text
///  Bit Index:  63             22 21           17 16            12 11              0
///              +----------------+---------------+----------------+----------------+
///  Field:      | timestamp (42) | worker ID (5) | process ID (5) | increment (12) |
///              +----------------+---------------+----------------+----------------+
///              |<------------- MSB ---------- 64 bits ----------- LSB ----------->|
/// ```
///
/// The value is stored as an `i64`. Every accessor is plain shifting and
/// masking, so snowflakes with the sign bit set decompose with two's
/// complement semantics (the timestamp shift sign-extends).
///
/// [`DISCORD_EPOCH`]: crate::DISCORD_EPOCH
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake {
    id: i64,
}

impl Snowflake {
    /// The zero snowflake. Parsing empty text yields this value.
    pub const ZERO: Self = Self { id: 0 };

    /// Number of bits to shift the timestamp to its correct position (bit 22).
    pub const TIMESTAMP_SHIFT: u32 = 22;

    /// Bitmask selecting the 5-bit worker ID field in place. Occupies bits 17
    /// through 21.
    pub const WORKER_ID_MASK: i64 = 0x3E_0000;

    /// Number of bits to shift the worker ID to its correct position (bit 17).
    pub const WORKER_ID_SHIFT: u32 = 17;

    /// Bitmask selecting the 5-bit process ID field in place. Occupies bits 12
    /// through 16.
    pub const PROCESS_ID_MASK: i64 = 0x1_F000;

    /// Number of bits to shift the process ID to its correct position (bit 12).
    pub const PROCESS_ID_SHIFT: u32 = 12;

    /// Bitmask selecting the 12-bit increment field. Occupies bits 0 through
    /// 11.
    pub const INCREMENT_MASK: i64 = 0xFFF;

    /// Wraps a raw integer without validation.
    pub const fn from_raw(id: i64) -> Self {
        Self { id }
    }

    /// Returns the raw integer.
    pub const fn to_raw(&self) -> i64 {
        self.id
    }

    /// Packs the four fields into a snowflake.
    ///
    /// `timestamp` is the delta from [`DISCORD_EPOCH`](crate::DISCORD_EPOCH)
    /// in milliseconds. The remaining fields are truncated to their widths.
    pub const fn from_components(
        timestamp: i64,
        worker_id: i64,
        process_id: i64,
        increment: i64,
    ) -> Self {
        let timestamp = timestamp << Self::TIMESTAMP_SHIFT;
        let worker_id = (worker_id << Self::WORKER_ID_SHIFT) & Self::WORKER_ID_MASK;
        let process_id = (process_id << Self::PROCESS_ID_SHIFT) & Self::PROCESS_ID_MASK;
        let increment = increment & Self::INCREMENT_MASK;
        Self {
            id: timestamp | worker_id | process_id | increment,
        }
    }

    /// Builds a snowflake carrying only a timestamp, given in milliseconds
    /// since the Unix epoch.
    ///
    /// The low 22 bits are zero. No range check is performed: the epoch
    /// subtraction and the shift wrap in two's complement.
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self {
            id: millis.wrapping_sub(DISCORD_EPOCH_MILLIS) << Self::TIMESTAMP_SHIFT,
        }
    }

    /// Builds a snowflake carrying only the timestamp of `instant`.
    ///
    /// See [`Self::from_unix_millis`] for the overflow behavior.
    ///
    /// ```
    /// use chatflake::Snowflake;
    /// use std::time::{Duration, UNIX_EPOCH};
    ///
    /// let instant = UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);
    /// let id = Snowflake::from_timestamp(instant);
    /// assert_eq!(id.timestamp(), 1_700_000_000_123);
    /// assert_eq!(id.increment(), 0);
    /// ```
    pub fn from_timestamp(instant: SystemTime) -> Self {
        Self::from_unix_millis(time::unix_millis(instant))
    }

    /// Parses base-10 text into a snowflake.
    ///
    /// Empty text is treated as absent and yields [`Self::ZERO`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDecimalText`] if `text` is non-empty and not a
    /// valid `i64` literal.
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::ZERO);
        }
        text.parse::<i64>()
            .map(Self::from_raw)
            .map_err(|source| Error::InvalidDecimalText {
                text: text.to_owned(),
                source,
            })
    }

    /// Like [`Self::parse`], but panics on invalid input.
    ///
    /// Only use this on literals that are known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `text` is non-empty and not a valid `i64` literal.
    #[track_caller]
    pub fn must_parse(text: &str) -> Self {
        match Self::parse(text) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Milliseconds since the Unix epoch at which this snowflake was minted.
    pub const fn timestamp(&self) -> i64 {
        (self.id >> Self::TIMESTAMP_SHIFT) + DISCORD_EPOCH_MILLIS
    }

    /// The generating worker.
    pub const fn worker_id(&self) -> i64 {
        (self.id & Self::WORKER_ID_MASK) >> Self::WORKER_ID_SHIFT
    }

    /// The generating process within the worker.
    pub const fn process_id(&self) -> i64 {
        (self.id & Self::PROCESS_ID_MASK) >> Self::PROCESS_ID_SHIFT
    }

    /// The number of ids generated on this process in the same millisecond
    /// before this one.
    pub const fn increment(&self) -> i64 {
        self.id & Self::INCREMENT_MASK
    }

    /// Returns this snowflake's timestamp as a [`SystemTime`].
    pub fn datetime(&self) -> SystemTime {
        time::from_unix_millis(self.timestamp())
    }

    /// Returns true for [`Self::ZERO`].
    pub const fn is_zero(&self) -> bool {
        self.id == 0
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snowflake")
            .field("id", &self.id)
            .field("timestamp", &self.timestamp())
            .field("worker_id", &self.worker_id())
            .field("process_id", &self.process_id())
            .field("increment", &self.increment())
            .finish()
    }
}

impl FromStr for Snowflake {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self::from_raw(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.to_raw()
    }
}
