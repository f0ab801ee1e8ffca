//! Roman CLI - Command line interface
//!
//! Converts Roman numerals given as arguments, read from a JSON batch file,
//! or, with no input at all, the demonstration samples.

use clap::Parser;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};

mod config;
mod logging;
mod platform;

use crate::config::LogConfig;
use crate::logging::LogFormat;
use crate::platform::print_error_with_source;
use roman_api::{
    convert_batch, init_config, parse_batch, BatchEntry, FileConfig, LogLevel, OutputFormat,
    RomanError, RunConfig, DEFAULT_SAMPLES,
};

/// 未指定 `--config` 时尝试读取的配置文件
const DEFAULT_CONFIG_FILE: &str = "roman.json";

#[derive(Parser, Debug)]
#[command(
    name = "roman",
    about = "Convert Roman numerals to integers",
    version = "0.1.0"
)]
struct Cli {
    /// Numerals to convert (default: demonstration samples)
    #[arg(value_name = "NUMERAL")]
    numerals: Vec<String>,

    /// JSON file containing an array of inputs
    #[arg(long, value_name = "FILE", conflicts_with = "numerals")]
    batch: Option<PathBuf>,

    /// Configuration file path (default: ./roman.json if present)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, value_parser = parse_output_format)]
    format: Option<OutputFormat>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print how each value was computed
    #[arg(long)]
    explain: bool,
}

fn main() {
    let cli = Cli::parse();

    let file_config = match read_file_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => exit_with(&e),
    };

    let run_config = build_run_config(&file_config, &cli);

    if let Err(e) = logging::init(
        &LogConfig::from_run_config(&run_config),
        cli.log_format,
        cli.log_file.as_deref(),
    ) {
        exit_with(&e);
    }

    // Initialize API config (global singleton for convenience)
    if let Err(e) = init_config(run_config.clone()) {
        exit_with(&e);
    }

    let inputs = match collect_inputs(&cli, &file_config) {
        Ok(inputs) => inputs,
        Err(e) => exit_with(&e),
    };

    info!(target: "roman::cli", count = inputs.len(), "converting");

    let entries = convert_batch(&inputs, &run_config);
    let failed = print_entries(&entries, &run_config);

    if failed > 0 {
        debug!(target: "roman::cli", failed, "some conversions failed");
        process::exit(1);
    }
}

/// Print a setup error report and exit
fn exit_with(e: &RomanError) -> ! {
    eprintln!("Error: {}", e.to_report().to_short());
    process::exit(1);
}

/// Read `roman.json`, or the file given with `--config`
fn read_file_config(path: Option<&Path>) -> Result<FileConfig, RomanError> {
    match path {
        Some(p) => load_file_config(p, true),
        None => load_file_config(Path::new(DEFAULT_CONFIG_FILE), false),
    }
}

/// Load a config file
///
/// A missing file is an error only when `required` is set.
fn load_file_config(path: &Path, required: bool) -> Result<FileConfig, RomanError> {
    if !path.exists() {
        if required {
            return Err(RomanError::Io(format!("未找到配置文件 '{}'", path.display())));
        }
        return Ok(FileConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| RomanError::Io(format!("无法读取 '{}': {}", path.display(), e)))?;

    FileConfig::from_json(&content)
        .map_err(|e| RomanError::Config(format!("解析 '{}' 失败: {}", path.display(), e)))
}

/// Merge the config file with command line overrides
fn build_run_config(file: &FileConfig, cli: &Cli) -> RunConfig {
    let mut config = RunConfig::from_file_config(file);

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.explain {
        config.explain = true;
    }

    config
}

/// Inputs in priority order: batch file, arguments, configured samples, built-in samples
fn collect_inputs(cli: &Cli, file: &FileConfig) -> Result<Vec<Value>, RomanError> {
    if let Some(path) = &cli.batch {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RomanError::Io(format!("无法读取 '{}': {}", path.display(), e)))?;
        return parse_batch(&content).map_err(|e| match e {
            RomanError::Config(msg) => RomanError::Config(format!("'{}': {}", path.display(), msg)),
            other => other,
        });
    }

    if !cli.numerals.is_empty() {
        return Ok(cli.numerals.iter().cloned().map(Value::String).collect());
    }

    let samples: Vec<String> = match &file.samples {
        Some(samples) => samples.clone(),
        None => DEFAULT_SAMPLES.iter().map(|s| s.to_string()).collect(),
    };
    Ok(samples.into_iter().map(Value::String).collect())
}

/// Print every entry; returns the number of failures
fn print_entries(entries: &[BatchEntry], config: &RunConfig) -> usize {
    let mut failed = 0;

    for entry in entries {
        match config.format {
            OutputFormat::Json => println!("{}", entry.to_json()),
            OutputFormat::Text => match &entry.outcome {
                Ok(conversion) => {
                    println!("{}", conversion.to_line());
                    if let Some(explanation) = &conversion.explanation {
                        println!("    {}", explanation);
                    }
                }
                Err(e) => print_error_with_source(e, &entry.input_text()),
            },
        }

        if !entry.is_ok() {
            failed += 1;
        }
    }

    failed
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(s).ok_or_else(|| format!("unknown format '{}' (expected text or json)", s))
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{}'", s))
}
