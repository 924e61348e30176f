use crate::error::{Result, ScrapeError};
use crate::utils::constants::{LISTING_URL, MONTHLY_URL, ROBOTS_URL};
use reqwest::Url;

/// The URLs of one AQI source site. Pointing the pipeline at another host
/// (or a local test server) means swapping this value, not the code.
#[derive(Debug, Clone)]
pub struct SiteEndpoints {
    pub listing_url: String,
    pub robots_url: String,
    pub monthly_url: String,
}

impl Default for SiteEndpoints {
    fn default() -> Self {
        Self {
            listing_url: LISTING_URL.to_string(),
            robots_url: ROBOTS_URL.to_string(),
            monthly_url: MONTHLY_URL.to_string(),
        }
    }
}

impl SiteEndpoints {
    /// Monthly-page URL for one city, with the city name percent-encoded
    /// as a query parameter.
    pub fn monthly_url_for(&self, city: &str) -> Result<Url> {
        Url::parse_with_params(&self.monthly_url, &[("city", city)])
            .map_err(|e| ScrapeError::InvalidUrl(format!("{}: {}", self.monthly_url, e)))
    }

    /// Path component of the listing URL, for the robots check.
    pub fn listing_path(&self) -> Result<String> {
        let url = Url::parse(&self.listing_url)
            .map_err(|e| ScrapeError::InvalidUrl(format!("{}: {}", self.listing_url, e)))?;
        Ok(url.path().to_string())
    }
}
