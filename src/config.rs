// src/config.rs
use crate::constants::DEFAULT_NOTION_VERSION;
use crate::error::AppError;
use crate::types::{ApiKey, ValidationError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: ToolCommand,
}

#[derive(Subcommand, Debug)]
pub enum ToolCommand {
    /// List the available tools
    List,

    /// Run one tool and print its result to stdout
    Call {
        /// Tool name, e.g. "notion-retrieve-page"
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, conflicts_with = "args_file")]
        args: Option<String>,

        /// Read tool arguments from a JSON file
        #[arg(long)]
        args_file: Option<PathBuf>,
    },
}

/// Log verbosity accepted by `LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ValidationError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

/// Resolved tool configuration, validated and ready to build a client.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub api_key: ApiKey,
    pub notion_version: String,
    pub log_level: LogLevel,
}

impl ToolConfig {
    /// Resolves configuration from the process environment.
    pub fn resolve() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let token = var("NOTION_API_TOKEN")
            .or_else(|| var("NOTION_API_KEY"))
            .ok_or_else(|| {
                AppError::MissingConfiguration(
                    "NOTION_API_TOKEN (or NOTION_API_KEY) environment variable not set".to_string(),
                )
            })?;
        let api_key = ApiKey::new(token)?;

        let notion_version = var("NOTION_VERSION")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_NOTION_VERSION.to_string());

        let log_level = match var("LOG_LEVEL") {
            Some(level) => level.parse()?,
            None => LogLevel::default(),
        };

        Ok(ToolConfig {
            api_key,
            notion_version,
            log_level,
        })
    }
}
