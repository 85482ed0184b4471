use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use textbook_core::load::TextbookPaths;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
const DEFAULT_SSE_RETRY_SECS: u64 = 3;

#[derive(Parser, Debug)]
#[command(name = "textbook-mcpd", version, about = "Textbook MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "TEXTBOOK_PAGES_PATH")]
    pages: PathBuf,

    #[arg(long, env = "TEXTBOOK_CHAPTERS_PATH")]
    chapters: PathBuf,

    #[arg(long, env = "TEXTBOOK_LESSONS_PATH")]
    lessons: PathBuf,

    #[arg(
        long = "stdio",
        env = "TEXTBOOK_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long = "http",
        env = "TEXTBOOK_ENABLE_HTTP",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_http: bool,

    #[arg(long, env = "TEXTBOOK_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "TEXTBOOK_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,

    #[arg(
        long,
        env = "TEXTBOOK_SSE_RETRY_SECS",
        default_value_t = DEFAULT_SSE_RETRY_SECS
    )]
    sse_retry_secs: u64,

    #[arg(
        long,
        env = "TEXTBOOK_HTTP_STATEFUL",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    http_stateful: bool,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct TextbookConfig {
    pub paths: TextbookPaths,
    pub enable_http: bool,
    pub mcp_http_addr: SocketAddr,
    pub sse_keep_alive: Duration,
    pub sse_retry: Duration,
    pub http_stateful: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    NoTransport,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::NoTransport => {
                write!(f, "no transport enabled: pass --stdio or --http")
            }
        }
    }
}

impl Error for ConfigError {}

impl TextbookConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for TextbookConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if !args.enable_stdio && !args.enable_http {
            return Err(ConfigError::NoTransport);
        }

        for (name, path) in [
            ("TEXTBOOK_PAGES_PATH", &args.pages),
            ("TEXTBOOK_CHAPTERS_PATH", &args.chapters),
            ("TEXTBOOK_LESSONS_PATH", &args.lessons),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::MissingSetting(name));
            }
        }

        Ok(Self {
            paths: TextbookPaths {
                pages: args.pages,
                chapters: args.chapters,
                lessons: args.lessons,
            },
            enable_http: args.enable_http,
            mcp_http_addr: args.mcp_http_addr,
            sse_keep_alive: Duration::from_secs(args.sse_keep_alive_secs),
            sse_retry: Duration::from_secs(args.sse_retry_secs),
            http_stateful: args.http_stateful,
        })
    }
}
