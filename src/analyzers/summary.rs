use crate::models::{CityRecord, MonthlyRecord, RankDirection};
use crate::processors::AqiTable;
use crate::utils::months::parse_month_label;

/// Ranking overview of one listing table: the cleanest and most polluted
/// cities plus aggregate figures.
#[derive(Debug)]
pub struct AqiSummary {
    pub best: Vec<CityRecord>,
    pub worst: Vec<CityRecord>,
    pub mean_aqi: f64,
    pub city_count: usize,
}

impl AqiSummary {
    /// None when the table is empty.
    pub fn from_table(table: &AqiTable, top_n: usize) -> Option<Self> {
        let mean_aqi = table.mean_aqi()?;
        Some(Self {
            best: table.rank(top_n, RankDirection::Ascending),
            worst: table.rank(top_n, RankDirection::Descending),
            mean_aqi,
            city_count: table.len(),
        })
    }

    pub fn detailed_summary(&self) -> String {
        let mut report = String::new();

        report.push_str("AQI SUMMARY\n");
        report.push_str("===========\n");
        report.push_str(&format!("Cities analyzed: {}\n", self.city_count));
        report.push_str(&format!("Mean AQI: {:.1}\n", self.mean_aqi));

        report.push_str("\nBest air quality (lowest AQI):\n");
        for (i, record) in self.best.iter().enumerate() {
            report.push_str(&format!("  {}. {} ({})\n", i + 1, record.city, record.aqi));
        }

        report.push_str("\nWorst air quality (highest AQI):\n");
        for (i, record) in self.worst.iter().enumerate() {
            report.push_str(&format!("  {}. {} ({})\n", i + 1, record.city, record.aqi));
        }

        report
    }
}

/// Aggregate figures over one city's monthly series.
#[derive(Debug, PartialEq)]
pub struct TrendStats {
    pub months: usize,
    pub min_aqi: u32,
    pub max_aqi: u32,
    pub mean_aqi: f64,
}

impl TrendStats {
    pub fn from_series(series: &[MonthlyRecord]) -> Option<Self> {
        if series.is_empty() {
            return None;
        }

        let min_aqi = series.iter().map(|r| r.aqi).min()?;
        let max_aqi = series.iter().map(|r| r.aqi).max()?;
        let total: u64 = series.iter().map(|r| u64::from(r.aqi)).sum();

        Some(Self {
            months: series.len(),
            min_aqi,
            max_aqi,
            mean_aqi: total as f64 / series.len() as f64,
        })
    }
}

/// Join two cities' series on the month label for side-by-side comparison.
/// Months are ordered chronologically when every label parses as a month;
/// otherwise the order of first appearance is kept.
pub fn align_months(
    a: &[MonthlyRecord],
    b: &[MonthlyRecord],
) -> Vec<(String, Option<u32>, Option<u32>)> {
    let mut months: Vec<String> = Vec::new();
    for record in a.iter().chain(b.iter()) {
        if !months.contains(&record.month) {
            months.push(record.month.clone());
        }
    }

    if months.iter().all(|m| parse_month_label(m).is_some()) {
        months.sort_by_key(|m| parse_month_label(m));
    }

    months
        .into_iter()
        .map(|month| {
            let aqi_a = a.iter().find(|r| r.month == month).map(|r| r.aqi);
            let aqi_b = b.iter().find(|r| r.month == month).map(|r| r.aqi);
            (month, aqi_a, aqi_b)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawCityRow;
    use pretty_assertions::assert_eq;

    fn table() -> AqiTable {
        AqiTable::build(vec![
            RawCityRow::new("A", "50"),
            RawCityRow::new("B", "10"),
            RawCityRow::new("C", "90"),
        ])
    }

    #[test]
    fn test_summary_best_and_worst() {
        let summary = AqiSummary::from_table(&table(), 2).unwrap();
        assert_eq!(summary.best[0], CityRecord::new("B", 10));
        assert_eq!(summary.worst[0], CityRecord::new("C", 90));
        assert_eq!(summary.city_count, 3);
        assert_eq!(summary.mean_aqi, 50.0);
    }

    #[test]
    fn test_summary_of_empty_table_is_none() {
        assert!(AqiSummary::from_table(&AqiTable::default(), 3).is_none());
    }

    #[test]
    fn test_trend_stats() {
        let series = vec![
            MonthlyRecord::new("2024-01", 72),
            MonthlyRecord::new("2024-02", 68),
            MonthlyRecord::new("2024-03", 76),
        ];
        assert_eq!(
            TrendStats::from_series(&series),
            Some(TrendStats {
                months: 3,
                min_aqi: 68,
                max_aqi: 76,
                mean_aqi: 72.0,
            })
        );
        assert_eq!(TrendStats::from_series(&[]), None);
    }

    #[test]
    fn test_align_months_orders_chronologically() {
        let a = vec![
            MonthlyRecord::new("2024-02", 68),
            MonthlyRecord::new("2024-01", 72),
        ];
        let b = vec![
            MonthlyRecord::new("2024-01", 55),
            MonthlyRecord::new("2024-03", 60),
        ];
        assert_eq!(
            align_months(&a, &b),
            vec![
                ("2024-01".to_string(), Some(72), Some(55)),
                ("2024-02".to_string(), Some(68), None),
                ("2024-03".to_string(), None, Some(60)),
            ]
        );
    }

    #[test]
    fn test_align_months_keeps_insertion_order_for_odd_labels() {
        let a = vec![MonthlyRecord::new("spring", 40)];
        let b = vec![MonthlyRecord::new("winter", 90)];
        assert_eq!(
            align_months(&a, &b),
            vec![
                ("spring".to_string(), Some(40), None),
                ("winter".to_string(), None, Some(90)),
            ]
        );
    }
}
