pub mod monthly_reader;

pub use monthly_reader::MonthlyReader;
