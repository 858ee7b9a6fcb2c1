pub mod config;
pub mod error;
pub mod process;

pub use config::Config;
pub use error::CleanError;
pub use process::{clean, load, raw_table::RawTable, run, run_with, save, RunSummary};
