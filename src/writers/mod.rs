pub mod monthly_writer;

pub use monthly_writer::MonthlyWriter;
