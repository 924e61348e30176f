pub mod fallback;

pub use fallback::{default_cities, sample_monthly};
