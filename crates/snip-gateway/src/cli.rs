use clap::{Parser, ValueEnum};
use snip_telemetry::LogFormat;
use snip_xid::{parse_machine_id, XidSettings};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::time::Duration;

pub const LISTEN_ADDR_ENV: &str = "SNIP_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "SNIP_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "SNIP_MYSQL_DSN";
pub const SHUTDOWN_GRACE_ENV: &str = "SNIP_SHUTDOWN_GRACE_SECS";
pub const LOG_FORMAT_ENV: &str = "SNIP_LOG_FORMAT";
pub const MACHINE_ID_ENV: &str = "SNIP_MACHINE_ID";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:9090";
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// Command-line and environment configuration of the gateway.
///
/// Every flag can also be set through its `SNIP_*` environment variable, and
/// a `.env` file in the working directory is loaded before parsing.
#[derive(Debug, Parser)]
#[command(name = "snip-gateway", version, about = "HTTP URL shortener")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    /// Seconds to let in-flight requests finish after a shutdown signal.
    #[arg(long, env = SHUTDOWN_GRACE_ENV, default_value_t = DEFAULT_SHUTDOWN_GRACE_SECS)]
    pub shutdown_grace_secs: u64,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,

    /// Machine id embedded in generated ids, as 6 hex digits. Random if unset.
    #[arg(long, env = MACHINE_ID_ENV, value_parser = parse_machine_id)]
    pub machine_id: Option<[u8; 3]>,
}

impl Cli {
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    pub fn xid_settings(&self) -> XidSettings {
        match self.machine_id {
            Some(machine_id) => XidSettings::builder().machine_id(machine_id).build(),
            None => XidSettings::builder().build(),
        }
    }
}
