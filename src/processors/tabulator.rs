use validator::Validate;

use crate::models::{CityRecord, RankDirection, RawCityRow};

/// Cleaned tabular view of the listing data. Construction applies the
/// cleaning rules; ranking is a read-only slice of the result.
#[derive(Debug, Clone, Default)]
pub struct AqiTable {
    rows: Vec<CityRecord>,
}

impl AqiTable {
    /// Clean raw parser output into a table:
    /// rows with a non-numeric AQI are dropped, rows with an empty city
    /// name are dropped, and duplicate cities keep the last-seen value
    /// (at the last-seen position).
    pub fn build(raw: Vec<RawCityRow>) -> Self {
        let mut rows: Vec<CityRecord> = Vec::with_capacity(raw.len());

        for row in raw {
            let Ok(aqi) = row.aqi.trim().parse::<u32>() else {
                tracing::debug!(city = %row.city, aqi = %row.aqi, "dropping non-numeric row");
                continue;
            };
            let record = CityRecord::new(row.city.trim(), aqi);
            if record.validate().is_err() {
                continue;
            }
            if let Some(pos) = rows.iter().position(|r| r.city == record.city) {
                rows.remove(pos);
            }
            rows.push(record);
        }

        Self { rows }
    }

    /// Table over already-clean records (the fallback dataset). Duplicate
    /// handling still applies so both paths share one invariant.
    pub fn from_records(records: Vec<CityRecord>) -> Self {
        let raw = records
            .into_iter()
            .map(|r| RawCityRow::new(r.city, r.aqi.to_string()))
            .collect();
        Self::build(raw)
    }

    pub fn rows(&self) -> &[CityRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Top-n by AQI. The sort is stable, so ties keep insertion order and
    /// the slice is deterministic; n is clamped to the table size.
    pub fn rank(&self, n: usize, direction: RankDirection) -> Vec<CityRecord> {
        let mut sorted = self.rows.clone();
        match direction {
            RankDirection::Ascending => sorted.sort_by_key(|r| r.aqi),
            RankDirection::Descending => sorted.sort_by_key(|r| std::cmp::Reverse(r.aqi)),
        }
        sorted.truncate(n.min(self.rows.len()));
        sorted
    }

    /// All rows ordered by ascending AQI, the natural bar-chart ordering.
    pub fn ordered(&self) -> Vec<CityRecord> {
        self.rank(self.rows.len(), RankDirection::Ascending)
    }

    pub fn mean_aqi(&self) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let total: u64 = self.rows.iter().map(|r| u64::from(r.aqi)).sum();
        Some(total as f64 / self.rows.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(rows: &[(&str, &str)]) -> Vec<RawCityRow> {
        rows.iter().map(|&(c, a)| RawCityRow::new(c, a)).collect()
    }

    #[test]
    fn test_build_drops_non_numeric_rows() {
        let table = AqiTable::build(raw(&[("A", "n/a"), ("B", "20")]));
        assert_eq!(table.rows(), &[CityRecord::new("B", 20)]);
    }

    #[test]
    fn test_build_drops_unnamed_rows() {
        let table = AqiTable::build(raw(&[("", "50"), ("  ", "60"), ("C", "70")]));
        assert_eq!(table.rows(), &[CityRecord::new("C", 70)]);
    }

    #[test]
    fn test_build_dedupes_keeping_last_value() {
        let table = AqiTable::build(raw(&[("A", "50"), ("B", "10"), ("A", "42")]));
        assert_eq!(
            table.rows(),
            &[CityRecord::new("B", 10), CityRecord::new("A", 42)]
        );
    }

    #[test]
    fn test_rank_ties_keep_insertion_order() {
        let table = AqiTable::build(raw(&[
            ("A", "50"),
            ("B", "10"),
            ("C", "90"),
            ("D", "10"),
        ]));
        let ranked = table.rank(3, RankDirection::Ascending);
        assert_eq!(
            ranked,
            vec![
                CityRecord::new("B", 10),
                CityRecord::new("D", 10),
                CityRecord::new("A", 50),
            ]
        );
    }

    #[test]
    fn test_rank_descending() {
        let table = AqiTable::build(raw(&[("A", "50"), ("B", "10"), ("C", "90")]));
        let ranked = table.rank(2, RankDirection::Descending);
        assert_eq!(
            ranked,
            vec![CityRecord::new("C", 90), CityRecord::new("A", 50)]
        );
    }

    #[test]
    fn test_rank_clamps_to_table_size() {
        let table = AqiTable::build(raw(&[("A", "50"), ("B", "10"), ("C", "90")]));
        assert_eq!(table.rank(10, RankDirection::Ascending).len(), 3);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let table = AqiTable::build(raw(&[("A", "50"), ("B", "10"), ("C", "90"), ("D", "10")]));
        let first = table.rank(3, RankDirection::Ascending);
        let second = table.rank(3, RankDirection::Ascending);
        assert_eq!(first, second);
    }

    #[test]
    fn test_mean_aqi() {
        let table = AqiTable::build(raw(&[("A", "10"), ("B", "20")]));
        assert_eq!(table.mean_aqi(), Some(15.0));
        assert_eq!(AqiTable::default().mean_aqi(), None);
    }
}
