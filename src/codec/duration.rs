//! Duration codec
//!
//! Durations are stored as sign-flipped 8-byte nanosecond counts and
//! rendered as `[-]HH:MM:SS.ffffff`.

use std::fmt;

use crate::error::Result;

use super::number::decode_int;

/// Fractional-second digits shown for decoded durations
pub const MAX_FSP: u8 = 6;

const NANOS_PER_SEC: u64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    nanos: i64,
    fsp: u8,
}

impl Duration {
    pub fn from_nanos(nanos: i64) -> Self {
        Self {
            nanos,
            fsp: MAX_FSP,
        }
    }

    pub fn as_nanos(&self) -> i64 {
        self.nanos
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanos < 0 {
            f.write_str("-")?;
        }

        let abs = self.nanos.unsigned_abs();
        let total_secs = abs / NANOS_PER_SEC;
        let hours = total_secs / 3600;
        let minutes = (total_secs / 60) % 60;
        let seconds = total_secs % 60;
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)?;

        if self.fsp > 0 {
            let width = usize::from(self.fsp);
            let frac = (abs % NANOS_PER_SEC) / 10u64.pow(9 - u32::from(self.fsp));
            write!(f, ".{:0width$}", frac, width = width)?;
        }
        Ok(())
    }
}

/// Decode a duration payload
pub fn decode_duration(buf: &[u8]) -> Result<(Duration, &[u8])> {
    let (nanos, rest) = decode_int(buf)?;
    Ok((Duration::from_nanos(nanos), rest))
}
