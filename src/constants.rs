// src/constants.rs
//! Domain constants that define the operational boundaries of the system.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base URL for every Notion REST endpoint.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// `Notion-Version` header sent when `NOTION_VERSION` is not set.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Smallest `page_size` a paginated endpoint accepts.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest `page_size` a paginated endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// Retry policy for transient API failures
// ---------------------------------------------------------------------------

/// Total attempts per request, including the first.
pub const RETRY_MAX_ATTEMPTS: u32 = 3;

/// Delay before the first retry; doubles after each failed attempt.
pub const RETRY_INITIAL_DELAY: Duration = Duration::from_millis(500);

/// Upper bound on the delay between attempts.
pub const RETRY_MAX_DELAY: Duration = Duration::from_secs(4);

/// Per-request timeout for the HTTP client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// File name of the log written under the system temp directory.
pub const LOG_FILE_NAME: &str = "notion_mcp_tools.log";

/// Shared by the console and file appenders.
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
