pub mod constants;
pub mod display;
pub mod filename;
pub mod months;
pub mod progress;

pub use constants::*;
pub use display::aqi_bar;
pub use filename::{city_file_stem, monthly_csv_path};
pub use months::parse_month_label;
pub use progress::ProgressReporter;
