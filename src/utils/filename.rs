use crate::error::{Result, ScrapeError};
use std::path::{Path, PathBuf};

/// Characters that are unsafe in file names on at least one supported platform.
const UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', '\0'];

/// Map a city identifier to a file stem safe for use as a file name.
///
/// Unsafe characters are replaced with '-'; a name that is empty after
/// sanitization (e.g. "///") is rejected rather than silently mapped to
/// an ambiguous file.
pub fn city_file_stem(city: &str) -> Result<String> {
    let stem: String = city
        .trim()
        .chars()
        .map(|c| if UNSAFE_CHARS.contains(&c) { '-' } else { c })
        .collect();

    if stem.trim_matches('-').is_empty() {
        return Err(ScrapeError::InvalidCityName(city.to_string()));
    }

    Ok(stem)
}

/// Path of the monthly CSV file for one city under the data directory.
pub fn monthly_csv_path(data_dir: &Path, city: &str) -> Result<PathBuf> {
    let stem = city_file_stem(city)?;
    Ok(data_dir.join(format!("{}.csv", stem)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_file_stem_passthrough() {
        assert_eq!(city_file_stem("Beijing").unwrap(), "Beijing");
        assert_eq!(city_file_stem("北京").unwrap(), "北京");
    }

    #[test]
    fn test_city_file_stem_sanitizes_separators() {
        assert_eq!(city_file_stem("A/B").unwrap(), "A-B");
        assert_eq!(city_file_stem("a\\b:c").unwrap(), "a-b-c");
    }

    #[test]
    fn test_city_file_stem_rejects_empty() {
        assert!(city_file_stem("").is_err());
        assert!(city_file_stem("   ").is_err());
        assert!(city_file_stem("///").is_err());
    }

    #[test]
    fn test_monthly_csv_path() {
        let path = monthly_csv_path(Path::new("data/monthly"), "Shanghai").unwrap();
        assert_eq!(path, PathBuf::from("data/monthly/Shanghai.csv"));
    }
}
