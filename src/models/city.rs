use serde::{Deserialize, Serialize};
use validator::Validate;

/// A city row as extracted from the listing page, before cleaning.
/// The AQI field is kept as text so the tabulator can decide what to drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCityRow {
    pub city: String,
    pub aqi: String,
}

impl RawCityRow {
    pub fn new(city: impl Into<String>, aqi: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            aqi: aqi.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CityRecord {
    #[validate(length(min = 1))]
    pub city: String,

    pub aqi: u32,
}

impl CityRecord {
    pub fn new(city: impl Into<String>, aqi: u32) -> Self {
        Self {
            city: city.into(),
            aqi,
        }
    }
}
