//! Public segmentation API
//!
//! `Segmenter` ties the pipeline together; `Config`/`ConfigBuilder`
//! describe how it runs.

mod config;
mod segmenter;


pub use config::{Config, ConfigBuilder};
pub use segmenter::{segment, Segmenter};
