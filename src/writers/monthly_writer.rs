use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::MonthlyRecord;
use crate::utils::filename::monthly_csv_path;

/// Writes one city's monthly series to its dedicated CSV file. The format
/// is headerless positional `month,aqi` rows; each save fully replaces any
/// prior content.
pub struct MonthlyWriter {
    data_dir: PathBuf,
}

impl MonthlyWriter {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Write the full series for one city, returning the path written.
    pub fn save_monthly(&self, city: &str, records: &[MonthlyRecord]) -> Result<PathBuf> {
        let path = monthly_csv_path(&self.data_dir, city)?;
        std::fs::create_dir_all(&self.data_dir)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        tracing::debug!(city, rows = records.len(), path = %path.display(), "saved monthly series");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_writes_headerless_rows() {
        let dir = TempDir::new().unwrap();
        let writer = MonthlyWriter::new(dir.path());

        let records = vec![
            MonthlyRecord::new("2024-01", 72),
            MonthlyRecord::new("2024-02", 68),
        ];
        let path = writer.save_monthly("Beijing", &records).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "2024-01,72\n2024-02,68\n");
    }

    #[test]
    fn test_save_replaces_prior_content() {
        let dir = TempDir::new().unwrap();
        let writer = MonthlyWriter::new(dir.path());

        writer
            .save_monthly("Beijing", &[MonthlyRecord::new("2023-01", 99)])
            .unwrap();
        let path = writer
            .save_monthly("Beijing", &[MonthlyRecord::new("2024-01", 72)])
            .unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "2024-01,72\n");
    }

    #[test]
    fn test_save_rejects_unmappable_city() {
        let dir = TempDir::new().unwrap();
        let writer = MonthlyWriter::new(dir.path());
        assert!(writer.save_monthly("///", &[]).is_err());
    }
}
