//! A single clock-in/clock-out record.

use serde::{Deserialize, Serialize};

/// One work interval inside a day's timecard.
///
/// `start` and `end` are Unix epoch seconds in local time. An entry
/// with `end == None` is still open (the user is clocked in). On disk
/// the open state is stored as `endTime: 0`, so files stay readable by
/// anything that already understands the historical format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(rename = "startTime")]
    pub start: i64,
    #[serde(rename = "endTime", with = "end_sentinel")]
    pub end: Option<i64>,
}

impl TimeEntry {
    /// A freshly opened interval.
    pub fn open(start: i64) -> Self {
        Self { start, end: None }
    }

    /// A completed interval.
    pub fn closed(start: i64, end: i64) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// Maps `end: Option<i64>` to the on-disk `endTime` field, where `0`
/// marks an interval that has not been closed yet.
mod end_sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(end: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(end.unwrap_or(0))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(if raw == 0 { None } else { Some(raw) })
    }
}
