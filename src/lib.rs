pub mod analyzers;
pub mod cli;
pub mod error;
pub mod fetchers;
pub mod models;
pub mod parsers;
pub mod processors;
pub mod providers;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{Result, ScrapeError};
