use serde::{Serialize, Serializer};
use std::fmt;

/// Playback-rate multiplier, stored exactly in hundredths (`125` is 1.25x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u32);

impl Speed {
    pub const NORMAL: Speed = Speed(100);

    /// Returns `None` for a zero multiplier.
    pub const fn from_percent(percent: u32) -> Option<Speed> {
        if percent == 0 {
            None
        } else {
            Some(Speed(percent))
        }
    }

    pub const fn percent(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}x", self.0 / 100)
        } else {
            write!(f, "{}x", self.as_f64())
        }
    }
}

// Whole multipliers go out as integers (1, 2), the rest as decimals (1.25)
impl Serialize for Speed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_u32(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

/// Speeds every summary is projected across, ascending.
pub const DEFAULT_SPEEDS: [Speed; 5] = [
    Speed(100),
    Speed(125),
    Speed(150),
    Speed(175),
    Speed(200),
];

/// Adjusted duration of one playback speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeedProjection {
    pub speed: Speed,
    #[serde(rename = "seconds")]
    pub adjusted_seconds: u64,
}

/// `ceil(total_seconds / speed)`, so the projected time never understates playback.
pub fn project(total_seconds: u64, speed: Speed) -> u64 {
    let scaled = u128::from(total_seconds) * 100;
    let adjusted = scaled.div_ceil(u128::from(speed.0));
    u64::try_from(adjusted).unwrap_or(u64::MAX)
}

pub fn project_all(total_seconds: u64, speeds: &[Speed]) -> Vec<SpeedProjection> {
    speeds
        .iter()
        .map(|&speed| SpeedProjection {
            speed,
            adjusted_seconds: project(total_seconds, speed),
        })
        .collect()
}
