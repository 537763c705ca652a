use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metrics collected during parsing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParserMetrics {
    /// Total files attempted to parse
    pub files_attempted: usize,

    /// Files successfully parsed
    pub files_succeeded: usize,

    /// Files that failed parsing
    pub files_failed: usize,

    /// Total time spent parsing
    #[serde(with = "duration_millis")]
    pub total_parse_time: Duration,

    /// Total declaration nodes produced
    pub total_declarations: usize,
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis: u64 = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl ParserMetrics {
    /// Record the outcome of one parse
    pub fn record(&mut self, success: bool, duration: Duration, declarations: usize) {
        self.files_attempted += 1;
        if success {
            self.files_succeeded += 1;
        } else {
            self.files_failed += 1;
        }
        self.total_parse_time += duration;
        self.total_declarations += declarations;
    }
}
