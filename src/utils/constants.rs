/// Source site endpoints
pub const LISTING_URL: &str = "https://www.aqistudy.cn/historydata/index.php";
pub const ROBOTS_URL: &str = "https://www.aqistudy.cn/robots.txt";
pub const MONTHLY_URL: &str = "https://www.aqistudy.cn/historydata/monthdata.php";

/// Crawl etiquette
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

/// Listing defaults
pub const DEFAULT_CITY_LIMIT: usize = 12;
pub const DEFAULT_RANKING_COUNT: usize = 3;

/// Persistence
pub const DEFAULT_DATA_DIR: &str = "data/monthly";

/// Display
pub const BAR_CHART_UNIT: u32 = 5;
pub const BAR_CHART_MAX_WIDTH: usize = 80;
