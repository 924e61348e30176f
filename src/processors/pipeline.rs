use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, ScrapeError};
use crate::fetchers::{AqiFetcher, RobotsPolicy, SiteEndpoints};
use crate::models::{ListingOutcome, MonthlyRecord};
use crate::parsers::{AqiStudyParser, SiteParser};
use crate::processors::AqiTable;
use crate::providers::default_cities;
use crate::utils::progress::ProgressReporter;
use crate::writers::MonthlyWriter;

/// End-to-end scrape pipeline: robots check, rate-limited fetch, parse,
/// fallback, clean, persist. Runs strictly sequentially; total latency is
/// city count times request time plus the fixed delay.
pub struct ScrapePipeline<P: SiteParser = AqiStudyParser> {
    fetcher: AqiFetcher,
    parser: P,
    writer: MonthlyWriter,
    endpoints: SiteEndpoints,
    robots: Option<RobotsPolicy>,
}

impl ScrapePipeline<AqiStudyParser> {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            fetcher: AqiFetcher::new()?,
            parser: AqiStudyParser::new(),
            writer: MonthlyWriter::new(data_dir),
            endpoints: SiteEndpoints::default(),
            robots: None,
        })
    }
}

impl<P: SiteParser> ScrapePipeline<P> {
    /// Swap the extraction strategy; everything else in the pipeline is
    /// unchanged by a different source site.
    pub fn with_parser<Q: SiteParser>(self, parser: Q) -> ScrapePipeline<Q> {
        ScrapePipeline {
            fetcher: self.fetcher,
            parser,
            writer: self.writer,
            endpoints: self.endpoints,
            robots: self.robots,
        }
    }

    pub fn with_endpoints(mut self, endpoints: SiteEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.fetcher = self.fetcher.with_request_delay(delay);
        self
    }

    pub fn writer(&self) -> &MonthlyWriter {
        &self.writer
    }

    /// Fetch the crawl policy once per session, before the first scrape
    /// request.
    async fn ensure_robots(&mut self) -> RobotsPolicy {
        if self.robots.is_none() {
            let policy = self.fetcher.fetch_robots(&self.endpoints.robots_url).await;
            self.robots = Some(policy);
        }
        self.robots.clone().unwrap_or_default()
    }

    fn check_allowed(policy: &RobotsPolicy, path: &str) -> Result<()> {
        if policy.is_allowed(path) {
            Ok(())
        } else {
            Err(ScrapeError::RobotsDisallowed {
                path: path.to_string(),
            })
        }
    }

    /// Scrape the listing page. The three outcomes are deliberately kept
    /// apart: a parsed result, a structurally-empty page, and a failed
    /// request are different facts even if two of them degrade the same way.
    pub async fn fetch_listing(&mut self, limit: usize) -> ListingOutcome {
        let policy = self.ensure_robots().await;

        let path = match self.endpoints.listing_path() {
            Ok(path) => path,
            Err(e) => return ListingOutcome::FetchFailed(e),
        };
        if let Err(e) = Self::check_allowed(&policy, &path) {
            return ListingOutcome::FetchFailed(e);
        }

        let listing_url = self.endpoints.listing_url.clone();
        let html = match self.fetcher.fetch(&listing_url).await {
            Ok(html) => html,
            Err(e) => return ListingOutcome::FetchFailed(e),
        };

        let mut rows = self.parser.parse_listing(&html);
        if rows.is_empty() {
            return ListingOutcome::Empty;
        }
        rows.truncate(limit);
        ListingOutcome::Parsed(rows)
    }

    /// Listing data as a cleaned table, falling back to the built-in
    /// dataset when the scrape fails or extracts nothing usable. Never
    /// raises: the worst case is a fallback-only table.
    pub async fn load_cities(&mut self, limit: usize) -> AqiTable {
        let table = match self.fetch_listing(limit).await {
            ListingOutcome::Parsed(rows) => AqiTable::build(rows),
            ListingOutcome::Empty => {
                tracing::info!("listing page yielded no rows, using fallback data");
                AqiTable::default()
            }
            ListingOutcome::FetchFailed(e) => {
                tracing::warn!(error = %e, "listing fetch failed, using fallback data");
                AqiTable::default()
            }
        };

        if table.is_empty() {
            AqiTable::from_records(default_cities(limit))
        } else {
            table
        }
    }

    /// Scrape one city's monthly series. A structurally-unexpected page
    /// yields an empty series; a failed request is an error for the caller
    /// to downgrade.
    pub async fn fetch_monthly(&mut self, city: &str) -> Result<Vec<MonthlyRecord>> {
        let policy = self.ensure_robots().await;

        let url = self.endpoints.monthly_url_for(city)?;
        Self::check_allowed(&policy, url.path())?;

        let html = self.fetcher.fetch(url.as_str()).await?;
        Ok(self.parser.parse_monthly(&html))
    }

    /// Sequentially scrape and persist the monthly series of each city,
    /// returning per-city row counts. One city failing leaves the others
    /// unaffected, and persistence problems are warnings rather than
    /// pipeline failures.
    pub async fn scrape_monthly_for(
        &mut self,
        cities: &[String],
        progress: Option<&ProgressReporter>,
    ) -> Vec<(String, usize)> {
        let mut report = Vec::with_capacity(cities.len());

        for city in cities {
            if let Some(p) = progress {
                p.set_message(&format!("Scraping monthly data: {}", city));
            }

            let series = match self.fetch_monthly(city).await {
                Ok(series) => series,
                Err(e) => {
                    tracing::warn!(city = %city, error = %e, "monthly fetch failed");
                    Vec::new()
                }
            };

            if series.is_empty() {
                tracing::info!(city = %city, "no monthly data available");
            } else if let Err(e) = self.writer.save_monthly(city, &series) {
                tracing::warn!(city = %city, error = %e, "could not persist monthly series");
            }

            report.push((city.clone(), series.len()));
            if let Some(p) = progress {
                p.increment(1);
            }
        }

        report
    }
}
