use indicatif::ProgressBar;
use quant_calib_data::config::{parse_cli, usage, CliCommand};
use quant_calib_data::generator::progress_bar;
use quant_calib_data::image::io::write_json_file;
use quant_calib_data::SampleGenerator;
use std::env;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args
        .next()
        .unwrap_or_else(|| "quant-calib-data".to_string());
    let config = match parse_cli(&program, args).map_err(|e| e.to_string())? {
        CliCommand::Run(config) => config,
        CliCommand::Help => {
            println!("{}", usage(&program));
            return Ok(());
        }
    };

    let pb = if config.output.progress {
        progress_bar(config.generator.count)
    } else {
        ProgressBar::hidden()
    };
    let mut generator = SampleGenerator::new(config.generator).map_err(|e| e.to_string())?;
    let report = generator.run_with_progress(&pb).map_err(|e| e.to_string())?;

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report).map_err(|e| e.to_string())?;
        println!("Run report written to {}", path.display());
    }
    println!(
        "Wrote {} samples to {}",
        report.count,
        report.output_dir.display()
    );
    Ok(())
}
