//! Log output for the `protoclass` binary.
//!
//! The runtime reports every composition step through `tracing`. Targets and
//! levels worth filtering on:
//!
//! | target                          | level   | event                                   |
//! |---------------------------------|---------|-----------------------------------------|
//! | `protoclass_runtime::builder`   | `debug` | `designed class`, `published class`     |
//! | `protoclass_runtime::builder`   | `warn`  | ignored `Extends` / `initialize` values |
//! | `protoclass_runtime::inherit`   | `debug` | `linked supertype` (statics copied)     |
//! | `protoclass_runtime::mixin`     | `debug` | `mixed in trait` (members copied)       |
//! | `protoclass_runtime::statics`   | `debug` | `applied STATIC`, `applied definition`  |
//! | `protoclass_runtime::compose`   | `trace` | `kept existing member` (no override)    |
//! | `protoclass_runtime::registry`  | `debug` | `registered`, `replaced existing binding` |
//! | `protoclass_runtime::registry`  | `warn`  | registration skipped on a blocked path  |
//! | `protoclass_runtime::interface` | `debug` | `designed interface`                    |
//! | `protoclass::cli::driver`       | `debug` | `loaded manifest`                       |
//!
//! `PROTOCLASS_LOG` (falling back to `RUST_LOG`) holds the filter, e.g.
//! `PROTOCLASS_LOG="protoclass_runtime::mixin=debug,protoclass_runtime::compose=trace"`
//! to see which trait member won each conflict. `PROTOCLASS_LOG_FORMAT`
//! picks `text` (default), `tree` or `json`. Nothing is installed unless a
//! filter is set, and output always goes to stderr so `inspect`/`tree`/`call`
//! output stays clean.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "PROTOCLASS_LOG";
pub const LOG_FORMAT_ENV: &str = "PROTOCLASS_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unknown is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default())
    }
}

/// The filter directive to install, if any. `PROTOCLASS_LOG` wins over
/// `RUST_LOG`.
fn filter_directive(own: Option<String>, fallback: Option<String>) -> Option<String> {
    own.or(fallback)
}

/// Install the global subscriber when a filter is configured.
pub fn init_tracing() {
    let Some(directive) = filter_directive(
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    ) else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(directive);

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_current_span(false)
                .with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
    }
}
