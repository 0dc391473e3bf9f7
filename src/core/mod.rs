pub mod config;
pub mod dedup;
pub mod sample;

pub use config::Config;
pub use dedup::{DeDup, DedupMethod, DedupReport};
