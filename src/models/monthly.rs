use serde::{Deserialize, Serialize};

/// One entry of a city's monthly AQI series. The month label is kept as
/// it appears on the source page (typically "YYYY-MM"); insertion order
/// is chronological as encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub month: String,
    pub aqi: u32,
}

impl MonthlyRecord {
    pub fn new(month: impl Into<String>, aqi: u32) -> Self {
        Self {
            month: month.into(),
            aqi,
        }
    }
}
