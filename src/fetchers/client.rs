use crate::error::Result;
use crate::fetchers::rate_limit::RateLimiter;
use crate::fetchers::robots::RobotsPolicy;
use crate::utils::constants::{DEFAULT_REQUEST_DELAY_MS, REQUEST_TIMEOUT_SECS, USER_AGENT};
use std::time::Duration;

/// Rate-limited HTTP fetcher. One GET per call, no retries; a failed call
/// is final and the caller decides how to degrade.
pub struct AqiFetcher {
    client: reqwest::Client,
    rate_limiter: RateLimiter,
}

impl AqiFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(Duration::from_millis(DEFAULT_REQUEST_DELAY_MS)),
        })
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.rate_limiter = RateLimiter::new(delay);
        self
    }

    /// Fetch one URL, honoring the inter-request delay. Returns the body on
    /// a 2xx response; network errors and non-2xx statuses are errors.
    pub async fn fetch(&mut self, url: &str) -> Result<String> {
        self.rate_limiter.wait().await;
        tracing::debug!(url, "fetching");

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        tracing::debug!(status = %response.status(), "received response");

        Ok(response.text().await?)
    }

    /// Fetch and parse robots.txt. An unreachable robots.txt is downgraded
    /// to a warning and an allow-all policy, matching polite-but-practical
    /// crawler behavior; an explicit Disallow is enforced by the pipeline.
    pub async fn fetch_robots(&mut self, robots_url: &str) -> RobotsPolicy {
        match self.fetch(robots_url).await {
            Ok(body) => {
                let policy = RobotsPolicy::parse(&body);
                tracing::debug!(
                    rules = policy.disallow_rules().len(),
                    "parsed robots.txt"
                );
                policy
            }
            Err(e) => {
                tracing::warn!(error = %e, "unable to fetch robots.txt, proceeding with caution");
                RobotsPolicy::allow_all()
            }
        }
    }
}
