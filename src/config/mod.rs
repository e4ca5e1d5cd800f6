pub mod runtime;

pub use runtime::{load_config, parse_cli, usage, CliCommand, OutputConfig, RuntimeConfig};
