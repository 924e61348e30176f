use scraper::{Html, Selector};
use std::collections::HashSet;

use crate::models::{MonthlyRecord, RawCityRow};
use crate::parsers::SiteParser;

/// Parser for the aqistudy.cn markup: the listing page carries city anchors
/// under a `div.all` container with the AQI in a `data-aqi` (or legacy
/// `aqi`) attribute; monthly pages carry a plain table whose AQI column is
/// identified by its header cell.
#[derive(Debug, Default)]
pub struct AqiStudyParser;

impl AqiStudyParser {
    pub fn new() -> Self {
        Self
    }

    fn city_aqi_attr(element: scraper::ElementRef<'_>) -> Option<&str> {
        element
            .value()
            .attr("data-aqi")
            .or_else(|| element.value().attr("aqi"))
    }
}

impl SiteParser for AqiStudyParser {
    fn parse_listing(&self, html: &str) -> Vec<RawCityRow> {
        let document = Html::parse_document(html);
        let link_selector = Selector::parse("div.all a").unwrap();

        let mut rows = Vec::new();
        for link in document.select(&link_selector) {
            let city: String = link.text().collect::<String>().trim().to_string();
            if city.is_empty() {
                continue;
            }
            // Anchors without an AQI attribute are navigation, not data
            let Some(aqi) = Self::city_aqi_attr(link) else {
                continue;
            };
            rows.push(RawCityRow::new(city, aqi.trim()));
        }

        tracing::debug!(rows = rows.len(), "parsed listing page");
        rows
    }

    fn parse_monthly(&self, html: &str) -> Vec<MonthlyRecord> {
        let document = Html::parse_document(html);
        let table_selector = Selector::parse("table").unwrap();
        let row_selector = Selector::parse("tr").unwrap();
        let header_selector = Selector::parse("th, td").unwrap();
        let cell_selector = Selector::parse("td").unwrap();

        let Some(table) = document.select(&table_selector).next() else {
            return Vec::new();
        };

        let mut table_rows = table.select(&row_selector);
        let Some(header_row) = table_rows.next() else {
            return Vec::new();
        };

        // Locate the AQI column by its header text; the site puts the month
        // label in the first column and AQI in the second when headers are
        // absent or unrecognized.
        let headers: Vec<String> = header_row
            .select(&header_selector)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();
        let aqi_index = headers
            .iter()
            .position(|h| h.to_uppercase().contains("AQI"))
            .unwrap_or(1);
        let month_index = 0;

        let mut seen_months = HashSet::new();
        let mut records = Vec::new();
        for row in table_rows {
            let cells: Vec<String> = row
                .select(&cell_selector)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect();
            if cells.len() <= aqi_index.max(month_index) {
                continue;
            }

            let month = cells[month_index].clone();
            let Ok(aqi) = cells[aqi_index].parse::<u32>() else {
                continue;
            };
            // Months are unique within one city's series; first wins
            if month.is_empty() || !seen_months.insert(month.clone()) {
                continue;
            }
            records.push(MonthlyRecord::new(month, aqi));
        }

        tracing::debug!(rows = records.len(), "parsed monthly page");
        records
    }
}
