use std::path::PathBuf;

use crate::error::Result;
use crate::models::MonthlyRecord;
use crate::utils::filename::monthly_csv_path;

/// Reads a city's persisted monthly series back from its CSV file.
pub struct MonthlyReader {
    data_dir: PathBuf,
}

impl MonthlyReader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the series for one city. An absent file returns `None`; an
    /// empty file returns an empty series. Callers treat both as "no data".
    pub fn load_monthly(&self, city: &str) -> Result<Option<Vec<MonthlyRecord>>> {
        let path = monthly_csv_path(&self.data_dir, city)?;
        if !path.exists() {
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&path)?;

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: MonthlyRecord = result?;
            records.push(record);
        }

        tracing::debug!(city, rows = records.len(), "loaded monthly series");
        Ok(Some(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::MonthlyWriter;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_preserves_order_and_values() {
        let dir = TempDir::new().unwrap();
        let writer = MonthlyWriter::new(dir.path());
        let reader = MonthlyReader::new(dir.path());

        let records = vec![
            MonthlyRecord::new("2024-03", 75),
            MonthlyRecord::new("2024-01", 72),
            MonthlyRecord::new("2024-02", 68),
        ];
        writer.save_monthly("杭州", &records).unwrap();

        let loaded = reader.load_monthly("杭州").unwrap().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_absent_file_is_none() {
        let dir = TempDir::new().unwrap();
        let reader = MonthlyReader::new(dir.path());
        assert_eq!(reader.load_monthly("Nowhere").unwrap(), None);
    }

    #[test]
    fn test_empty_file_is_empty_series() {
        let dir = TempDir::new().unwrap();
        let writer = MonthlyWriter::new(dir.path());
        let reader = MonthlyReader::new(dir.path());

        writer.save_monthly("Empty", &[]).unwrap();
        assert_eq!(reader.load_monthly("Empty").unwrap(), Some(vec![]));
    }
}
