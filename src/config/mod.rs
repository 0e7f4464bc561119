//! Configuration for building and reporting a module tree.
//!
//! - [`file`] - The persistent TOML configuration file
//! - [`options`] - Resolved options after merging CLI arguments with the file

pub mod file;
pub mod options;

pub use file::FileConfig;
pub use options::{BuildOptions, ReportOptions};
