use crate::error::ScrapeError;
use crate::models::RawCityRow;

/// Result of scraping the listing page. "Nothing extracted" and "couldn't
/// ask" are distinct states even though both degrade to fallback data.
#[derive(Debug)]
pub enum ListingOutcome {
    /// The page was fetched and at least one row matched the expected markup.
    Parsed(Vec<RawCityRow>),
    /// The page was fetched but no row matched the expected markup.
    Empty,
    /// The request itself failed (network error, non-2xx, robots refusal).
    FetchFailed(ScrapeError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDirection {
    /// Lowest AQI first: the cleanest air.
    Ascending,
    /// Highest AQI first: the most polluted.
    Descending,
}
