use crate::utils::constants::{BAR_CHART_MAX_WIDTH, BAR_CHART_UNIT};

/// Ascii bar for one AQI value: one '#' per BAR_CHART_UNIT points, capped
/// at BAR_CHART_MAX_WIDTH characters. The AQI comes from remote markup,
/// so the cap also bounds the allocation.
pub fn aqi_bar(aqi: u32) -> String {
    let length = (aqi / BAR_CHART_UNIT) as usize;
    "#".repeat(length.min(BAR_CHART_MAX_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aqi_bar_scales_with_value() {
        assert_eq!(aqi_bar(0), "");
        assert_eq!(aqi_bar(50).len(), 10);
        assert_eq!(aqi_bar(100).len(), 20);
    }

    #[test]
    fn test_aqi_bar_is_capped() {
        assert_eq!(aqi_bar(401).len(), BAR_CHART_MAX_WIDTH);
        assert_eq!(aqi_bar(u32::MAX).len(), BAR_CHART_MAX_WIDTH);
    }
}
