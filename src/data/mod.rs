//! Data module
//!
//! Fill and order files for replay and paper runs

mod jsonl;

pub use jsonl::{read_fills, read_orders, write_fills, JsonlError};
