//! Configuration files consumed by the `spiral_clean` tool.

mod runtime;

pub use runtime::{load_config, parse_config, OutputConfig, OutputFormat, RuntimeConfig};
