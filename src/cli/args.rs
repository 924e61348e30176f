use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{DEFAULT_CITY_LIMIT, DEFAULT_DATA_DIR, DEFAULT_RANKING_COUNT};

#[derive(Parser)]
#[command(name = "aqi-scraper")]
#[command(about = "Polite city-AQI scraper with rankings and trend analysis")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        default_value = DEFAULT_DATA_DIR,
        help = "Directory holding per-city monthly CSV files"
    )]
    pub data_dir: PathBuf,

    #[arg(
        long,
        global = true,
        help = "Minimum delay between requests in milliseconds [default: 1000]"
    )]
    pub request_delay_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape the city listing and show AQI rankings
    Rank {
        #[arg(short, long, default_value_t = DEFAULT_CITY_LIMIT, help = "Number of cities to scrape")]
        limit: usize,

        #[arg(short, long, default_value_t = DEFAULT_RANKING_COUNT, help = "Ranking depth for best/worst")]
        top: usize,

        #[arg(long, default_value = "false", help = "Emit results as JSON")]
        json: bool,

        #[arg(
            long,
            default_value = "false",
            help = "Also scrape and persist each city's monthly series"
        )]
        save_monthly: bool,
    },

    /// Scrape and persist monthly AQI series to per-city CSV files
    Monthly {
        #[arg(short, long, help = "City to scrape (repeatable); defaults to the current listing")]
        city: Vec<String>,

        #[arg(short, long, default_value_t = DEFAULT_CITY_LIMIT, help = "Listing size when no city is given")]
        limit: usize,

        #[arg(
            long,
            default_value = "false",
            help = "Write built-in sample series instead of scraping"
        )]
        offline: bool,
    },

    /// Display a city's persisted monthly trend
    Trend {
        #[arg(short, long, help = "City to display")]
        city: String,

        #[arg(short, long, help = "Show a single month instead of the whole series")]
        month: Option<String>,
    },

    /// Compare the monthly series of two cities month by month
    Compare {
        #[arg(long, help = "First city")]
        city_a: String,

        #[arg(long, help = "Second city")]
        city_b: String,
    },
}
