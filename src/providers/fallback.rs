use crate::models::{CityRecord, MonthlyRecord};

/// Built-in listing data, used whenever the live scrape fails or extracts
/// nothing. Values are plausible AQI figures for major Chinese cities.
const SAMPLE_CITIES: &[(&str, u32)] = &[
    ("北京", 85),
    ("上海", 70),
    ("广州", 60),
    ("深圳", 55),
    ("杭州", 65),
    ("南京", 75),
    ("武汉", 90),
    ("成都", 95),
    ("重庆", 92),
    ("西安", 88),
    ("天津", 80),
    ("苏州", 68),
];

/// Built-in monthly series, used by offline mode to keep the tool usable
/// without network access.
const SAMPLE_MONTHS: &[(&str, u32)] = &[
    ("2024-01", 72),
    ("2024-02", 68),
    ("2024-03", 75),
    ("2024-04", 70),
    ("2024-05", 66),
    ("2024-06", 64),
    ("2024-07", 62),
    ("2024-08", 65),
    ("2024-09", 69),
    ("2024-10", 73),
    ("2024-11", 78),
    ("2024-12", 80),
];

/// The fallback listing dataset, truncated to `limit`. Pure static data,
/// never fails.
pub fn default_cities(limit: usize) -> Vec<CityRecord> {
    SAMPLE_CITIES
        .iter()
        .take(limit)
        .map(|&(city, aqi)| CityRecord::new(city, aqi))
        .collect()
}

/// A year of sample monthly figures for one city.
pub fn sample_monthly(_city: &str) -> Vec<MonthlyRecord> {
    SAMPLE_MONTHS
        .iter()
        .map(|&(month, aqi)| MonthlyRecord::new(month, aqi))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cities_respects_limit() {
        for n in 0..=SAMPLE_CITIES.len() {
            let cities = default_cities(n);
            assert_eq!(cities.len(), n);
        }
    }

    #[test]
    fn test_limit_beyond_sample_returns_all() {
        assert_eq!(default_cities(100).len(), SAMPLE_CITIES.len());
    }

    #[test]
    fn test_sample_monthly_is_a_full_year() {
        let series = sample_monthly("北京");
        assert_eq!(series.len(), 12);
        assert!(series.iter().all(|r| r.aqi > 0));
    }
}
