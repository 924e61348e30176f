pub mod client;
pub mod endpoints;
pub mod rate_limit;
pub mod robots;

pub use client::AqiFetcher;
pub use endpoints::SiteEndpoints;
pub use rate_limit::RateLimiter;
pub use robots::RobotsPolicy;
