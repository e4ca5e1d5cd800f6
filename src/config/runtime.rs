use crate::error::{Result, SampleError};
use crate::generator::GeneratorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON run report, if anywhere.
    pub report_json: Option<PathBuf>,
    /// Draw a console progress bar.
    pub progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_json: None,
            progress: true,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub generator: GeneratorParams,
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        SampleError::Config(format!("Failed to read config {}: {e}", path.display()))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        SampleError::Config(format!("Failed to parse config {}: {e}", path.display()))
    })
}

/// What the binary was asked to do.
#[derive(Clone, Debug)]
pub enum CliCommand {
    Run(RuntimeConfig),
    Help,
}

/// Resolve the command from the arguments following the program name. No
/// argument runs the built-in defaults; one argument names a JSON config file.
pub fn parse_cli<I>(program: &str, args: I) -> Result<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    match args.as_slice() {
        [] => Ok(CliCommand::Run(RuntimeConfig::default())),
        [flag] if flag == "-h" || flag == "--help" => Ok(CliCommand::Help),
        [path] => load_config(Path::new(path)).map(CliCommand::Run),
        _ => Err(SampleError::Config(usage(program))),
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} [config.json]")
}
