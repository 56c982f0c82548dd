use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters kept by [`CodeParser::parse_file`](crate::CodeParser::parse_file)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParserMetrics {
    pub files_attempted: usize,
    pub files_succeeded: usize,

    /// Unreadable or over the size limit
    pub files_failed: usize,

    #[serde(with = "duration_serde")]
    pub total_parse_time: Duration,

    /// Records registered by the successful files
    pub total_classes: usize,
}

impl ParserMetrics {
    /// Fraction of attempted files that parsed; 0.0 before any attempt
    pub fn success_rate(&self) -> f64 {
        match self.files_attempted {
            0 => 0.0,
            attempted => self.files_succeeded as f64 / attempted as f64,
        }
    }

    pub fn avg_parse_time(&self) -> Duration {
        match u32::try_from(self.files_succeeded) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(succeeded) => self.total_parse_time / succeeded,
        }
    }

    /// Add the counters of another parser, e.g. one per worker
    pub fn merge(&mut self, other: &ParserMetrics) {
        self.files_attempted += other.files_attempted;
        self.files_succeeded += other.files_succeeded;
        self.files_failed += other.files_failed;
        self.total_parse_time += other.total_parse_time;
        self.total_classes += other.total_classes;
    }
}

/// `Duration` as whole microseconds
pub(crate) mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        u64::try_from(duration.as_micros())
            .unwrap_or(u64::MAX)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_micros)
    }
}
