pub mod aqistudy;

pub use aqistudy::AqiStudyParser;

use crate::models::{MonthlyRecord, RawCityRow};

/// Extraction strategy for one source site's markup. The pipeline is
/// generic over this trait, so supporting another site means writing
/// another implementation, not touching the fetch/clean/persist chain.
pub trait SiteParser {
    /// Extract (city, raw AQI) pairs from the listing page. Rows that do
    /// not match the expected structure are skipped, not errored; an empty
    /// result is valid and means "nothing extracted".
    fn parse_listing(&self, html: &str) -> Vec<RawCityRow>;

    /// Extract a (month, AQI) series from a per-city monthly page.
    fn parse_monthly(&self, html: &str) -> Vec<MonthlyRecord>;
}
