use std::time::Duration;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use crate::analyzers::{align_months, AqiSummary, TrendStats};
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::ScrapePipeline;
use crate::providers::sample_monthly;
use crate::readers::MonthlyReader;
use crate::utils::display::aqi_bar;
use crate::utils::progress::ProgressReporter;

pub async fn run(cli: Cli) -> Result<()> {
    let default_filter = if cli.verbose {
        "aqi_scraper=debug"
    } else {
        "aqi_scraper=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Rank {
            limit,
            top,
            json,
            save_monthly,
        } => {
            let mut pipeline = build_pipeline(&cli.data_dir, cli.request_delay_ms)?;

            let progress = ProgressReporter::new_spinner("Scraping city AQI listing...", json);
            let table = pipeline.load_cities(limit).await;
            progress.finish_with_message(&format!("Loaded {} cities", table.len()));

            let Some(summary) = AqiSummary::from_table(&table, top) else {
                println!("No AQI data available");
                return Ok(());
            };

            if json {
                let report = json!({
                    "cities": table.rows(),
                    "best": summary.best,
                    "worst": summary.worst,
                    "mean_aqi": summary.mean_aqi,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("\nCity AQI data:");
                for record in table.rows() {
                    println!("  {:<12} {:>4}", record.city, record.aqi);
                }

                println!("\n{}", summary.detailed_summary());

                println!("AQI bar chart (ascending):");
                for record in table.ordered() {
                    println!("  {:<12} {:>4} {}", record.city, record.aqi, aqi_bar(record.aqi));
                }
            }

            if save_monthly {
                let cities: Vec<String> =
                    table.rows().iter().map(|r| r.city.clone()).collect();
                scrape_and_report_monthly(&mut pipeline, &cities).await;
            }
        }

        Commands::Monthly {
            city,
            limit,
            offline,
        } => {
            let mut pipeline = build_pipeline(&cli.data_dir, cli.request_delay_ms)?;

            let cities: Vec<String> = if city.is_empty() {
                let table = pipeline.load_cities(limit).await;
                table.rows().iter().map(|r| r.city.clone()).collect()
            } else {
                city
            };

            if offline {
                println!("Writing built-in sample series for {} cities...", cities.len());
                for city in &cities {
                    let series = sample_monthly(city);
                    match pipeline.writer().save_monthly(city, &series) {
                        Ok(path) => println!("  {:<12} {} months -> {}", city, series.len(), path.display()),
                        Err(e) => tracing::warn!(city = %city, error = %e, "could not persist sample series"),
                    }
                }
            } else {
                scrape_and_report_monthly(&mut pipeline, &cities).await;
            }
        }

        Commands::Trend { city, month } => {
            let reader = MonthlyReader::new(&cli.data_dir);

            let series = reader.load_monthly(&city)?.unwrap_or_default();
            if series.is_empty() {
                println!(
                    "No monthly data for {} - run `aqi-scraper monthly --city {}` first",
                    city, city
                );
                return Ok(());
            }

            if let Some(month) = month {
                match series.iter().find(|r| r.month == month) {
                    Some(record) => println!("{} {}: AQI {}", city, record.month, record.aqi),
                    None => println!("No data for {} in {}", city, month),
                }
                return Ok(());
            }

            println!("Monthly AQI trend for {}:", city);
            for record in &series {
                println!("  {:<8} {:>4} {}", record.month, record.aqi, aqi_bar(record.aqi));
            }

            if let Some(stats) = TrendStats::from_series(&series) {
                println!(
                    "\n{} months: min {} / mean {:.1} / max {}",
                    stats.months, stats.min_aqi, stats.mean_aqi, stats.max_aqi
                );
            }
        }

        Commands::Compare { city_a, city_b } => {
            let reader = MonthlyReader::new(&cli.data_dir);

            let series_a = reader.load_monthly(&city_a)?.unwrap_or_default();
            let series_b = reader.load_monthly(&city_b)?.unwrap_or_default();
            if series_a.is_empty() && series_b.is_empty() {
                println!("No monthly data for {} or {}", city_a, city_b);
                return Ok(());
            }

            println!("{:<8} {:>8} {:>8}", "Month", city_a, city_b);
            for (month, aqi_a, aqi_b) in align_months(&series_a, &series_b) {
                println!(
                    "{:<8} {:>8} {:>8}",
                    month,
                    format_cell(aqi_a),
                    format_cell(aqi_b)
                );
            }
        }
    }

    Ok(())
}

fn build_pipeline(
    data_dir: &std::path::Path,
    request_delay_ms: Option<u64>,
) -> Result<ScrapePipeline> {
    let mut pipeline = ScrapePipeline::new(data_dir)?;
    if let Some(ms) = request_delay_ms {
        pipeline = pipeline.with_request_delay(Duration::from_millis(ms));
    }
    Ok(pipeline)
}

async fn scrape_and_report_monthly(pipeline: &mut ScrapePipeline, cities: &[String]) {
    let progress =
        ProgressReporter::new(cities.len() as u64, "Scraping monthly series...", false);
    let report = pipeline.scrape_monthly_for(cities, Some(&progress)).await;
    progress.finish_with_message("Monthly scrape complete");

    println!("\nMonthly series saved under {}:", pipeline.writer().data_dir().display());
    for (city, rows) in report {
        if rows == 0 {
            println!("  {:<12} no data", city);
        } else {
            println!("  {:<12} {} months", city, rows);
        }
    }
}

fn format_cell(aqi: Option<u32>) -> String {
    match aqi {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
