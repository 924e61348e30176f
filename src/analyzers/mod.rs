pub mod summary;

pub use summary::{align_months, AqiSummary, TrendStats};
