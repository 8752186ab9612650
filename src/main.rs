// src/main.rs
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_mcp_tools::constants::{LOG_FILE_NAME, LOG_PATTERN};
use notion_mcp_tools::{
    call_tool, AppError, CommandLineInput, LogLevel, NotionHttpClient, RetryingRepository,
    ToolCommand, ToolConfig, TOOL_CATALOG,
};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Sets up logging configuration.
///
/// Console output goes to stderr; stdout is reserved for tool results.
fn setup_logging(log_level: LevelFilter) -> anyhow::Result<()> {
    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&log_file_path)
        .with_context(|| format!("opening log file {}", log_file_path.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// `--verbose` always means debug; otherwise the configured level applies.
fn effective_level(verbose: bool, configured: LogLevel) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        configured.into()
    }
}

fn print_catalog() {
    let width = TOOL_CATALOG
        .iter()
        .map(|descriptor| descriptor.name.as_str().len())
        .max()
        .unwrap_or(0);
    for descriptor in TOOL_CATALOG {
        println!(
            "{:<width$}  {}",
            descriptor.name.as_str(),
            descriptor.description,
            width = width
        );
    }
}

/// Tool arguments from `--args`, `--args-file`, or an empty object.
fn read_arguments(args: Option<String>, args_file: Option<PathBuf>) -> anyhow::Result<Value> {
    let raw = match (args, args_file) {
        (Some(inline), _) => inline,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("reading arguments from {}", path.display()))?,
        (None, None) => return Ok(Value::Object(Default::default())),
    };
    serde_json::from_str(&raw).context("tool arguments are not valid JSON")
}

async fn run_tool(config: &ToolConfig, tool: &str, args: Value) -> Result<String, AppError> {
    let repo = RetryingRepository::new(NotionHttpClient::new(config)?);
    call_tool(&repo, tool, args).await
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = CommandLineInput::parse();

    match cli.command {
        ToolCommand::List => {
            setup_logging(effective_level(cli.verbose, LogLevel::default()))?;
            print_catalog();
            Ok(ExitCode::SUCCESS)
        }
        ToolCommand::Call {
            tool,
            args,
            args_file,
        } => {
            let config = match ToolConfig::resolve() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("{}", e.user_message(Some(&tool)));
                    return Ok(ExitCode::FAILURE);
                }
            };
            setup_logging(effective_level(cli.verbose, config.log_level))?;

            let args = read_arguments(args, args_file)?;
            match run_tool(&config, &tool, args).await {
                Ok(output) => {
                    println!("{}", output);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    log::debug!("{} failed: {:?}", tool, e);
                    eprintln!("{}", e.user_message(Some(&tool)));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
