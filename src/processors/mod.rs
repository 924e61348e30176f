pub mod pipeline;
pub mod tabulator;

pub use pipeline::ScrapePipeline;
pub use tabulator::AqiTable;
