pub mod city;
pub mod monthly;
pub mod outcome;

pub use city::{CityRecord, RawCityRow};
pub use monthly::MonthlyRecord;
pub use outcome::{ListingOutcome, RankDirection};
