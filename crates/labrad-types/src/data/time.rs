// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! LabRAD timestamps.
//!
//! Seconds count from 1904-01-01T00:00:00Z; the sub-second part is a
//! 64-bit binary fraction (units of 2^-64 s).

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds between 1904-01-01 and 1970-01-01.
pub const LABRAD_EPOCH_OFFSET: i64 = 2_082_844_800;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Wire representation of a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    /// Whole seconds since the LabRAD epoch.
    pub seconds: i64,
    /// Fraction of a second, in units of 2^-64 s.
    pub fraction: u64,
}

impl Timestamp {
    pub const fn new(seconds: i64, fraction: u64) -> Self {
        Self { seconds, fraction }
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self {
                seconds: LABRAD_EPOCH_OFFSET.saturating_add_unsigned(after.as_secs()),
                fraction: nanos_to_fraction(after.subsec_nanos()),
            },
            Err(err) => {
                let before = err.duration();
                let nanos = before.subsec_nanos();
                let mut seconds = LABRAD_EPOCH_OFFSET.saturating_sub_unsigned(before.as_secs());
                let mut fraction = 0;
                if nanos > 0 {
                    seconds = seconds.saturating_sub(1);
                    fraction = nanos_to_fraction(1_000_000_000 - nanos);
                }
                Self { seconds, fraction }
            }
        }
    }

    /// Converts back to `SystemTime`, `None` if the platform cannot
    /// represent the instant.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        let unix_seconds = self.seconds.checked_sub(LABRAD_EPOCH_OFFSET)?;
        let sub = Duration::from_nanos(u64::from(fraction_to_nanos(self.fraction)));
        let whole = Duration::from_secs(unix_seconds.unsigned_abs());
        let base = if unix_seconds >= 0 {
            UNIX_EPOCH.checked_add(whole)?
        } else {
            UNIX_EPOCH.checked_sub(whole)?
        };
        base.checked_add(sub)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

fn nanos_to_fraction(nanos: u32) -> u64 {
    ((u128::from(nanos) << 64) / NANOS_PER_SEC) as u64
}

fn fraction_to_nanos(fraction: u64) -> u32 {
    // Round to nearest so that nanos -> fraction -> nanos is lossless.
    ((u128::from(fraction) * NANOS_PER_SEC + (1u128 << 63)) >> 64) as u32
}
