//! PMode-wide reliability policy and payload service settings.

use super::TriState;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Default delay between retries.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(10);

/// Reception awareness (retry and duplicate detection) policy.
///
/// The retry count and interval are plain values. No bounds are enforced on
/// them here or by any built-in profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PModeReceptionAwareness {
    /// Reception awareness is active.
    #[serde(default)]
    pub enabled: TriState,
    /// Unacknowledged messages are resent.
    #[serde(default)]
    pub retry: TriState,
    /// Maximum number of resends.
    #[serde(default)]
    pub max_retries: u32,
    /// Delay between resends.
    #[serde(default, with = "duration_millis")]
    pub retry_interval: Duration,
    /// Duplicate received messages are detected and dropped.
    #[serde(default)]
    pub duplicate_detection: TriState,
}

impl PModeReceptionAwareness {
    /// Creates a reception awareness policy.
    #[must_use]
    pub const fn new(
        enabled: TriState,
        retry: TriState,
        max_retries: u32,
        retry_interval: Duration,
        duplicate_detection: TriState,
    ) -> Self {
        Self {
            enabled,
            retry,
            max_retries,
            retry_interval,
            duplicate_detection,
        }
    }
}

impl Default for PModeReceptionAwareness {
    fn default() -> Self {
        Self::new(
            TriState::True,
            TriState::True,
            DEFAULT_MAX_RETRIES,
            DEFAULT_RETRY_INTERVAL,
            TriState::True,
        )
    }
}

/// Payload compression applied by the payload service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionType {
    /// GZIP compression of attachments.
    Gzip,
}

impl CompressionType {
    /// Returns the MIME type used in part properties.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Gzip => "application/gzip",
        }
    }
}

/// Payload handling settings of a PMode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PModePayloadService {
    /// Compression applied to attachments; absent means "no compression".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<CompressionType>,
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
