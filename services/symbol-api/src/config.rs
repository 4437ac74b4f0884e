//! Service configuration.
//!
//! Command-line flags fall back to environment variables (a `.env` file is
//! loaded first by the binary). The result is resolved once into a
//! [`ServiceConfig`] and shared read-only for the life of the process.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use symbol_common::RenderOptions;

/// Default bind address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4000";

/// Name reported by the info endpoint.
pub const APP_NAME: &str = "Weather Symbol Microservice";

/// Weather Symbol API Server
#[derive(Parser, Debug, Clone)]
#[command(name = "symbol-api")]
#[command(about = "Renders weather symbols and wind direction arrows as SVG")]
pub struct Args {
    /// Listen address
    #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR, env = "SYMBOL_LISTEN_ADDR")]
    pub listen: String,

    /// Port, overriding the port of the listen address
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory containing `assets/` (defaults to the working directory)
    #[arg(long, env = "ASSETS_BASE_PATH")]
    pub assets_base_path: Option<PathBuf>,

    /// Return SVG documents without optimization
    #[arg(
        long = "no-opt-svg",
        env = "NOOPTSVG",
        action = clap::ArgAction::Set,
        value_parser = parse_yn,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub no_opt_svg: bool,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Number of worker threads
    #[arg(long, env = "SYMBOL_WORKER_THREADS")]
    pub worker_threads: Option<usize>,
}

/// Loose yes/no parsing for environment flags.
///
/// `y`, `yes`, `true`, `1` and `on` are true, ignoring case and
/// surrounding whitespace. Everything else is false.
pub fn yn(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1" | "on"
    )
}

fn parse_yn(value: &str) -> Result<bool, String> {
    Ok(yn(value))
}

/// Resolve the bind address, applying a port override.
pub fn resolve_listen_addr(listen: &str, port: Option<u16>) -> Result<SocketAddr> {
    let mut addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("Invalid listen address: {}", listen))?;
    if let Some(port) = port {
        addr.set_port(port);
    }
    Ok(addr)
}

/// Version metadata reported by the info endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub commit_hash: String,
    pub environment: String,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit_hash: "unknown".to_string(),
            environment: "production".to_string(),
        }
    }
}

impl BuildInfo {
    /// Read `APP_VERSION`, `GIT_COMMIT_HASH` and `APP_ENV`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            version: std::env::var("APP_VERSION").unwrap_or(defaults.version),
            commit_hash: std::env::var("GIT_COMMIT_HASH").unwrap_or(defaults.commit_hash),
            environment: std::env::var("APP_ENV").unwrap_or(defaults.environment),
        }
    }
}

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub listen_addr: SocketAddr,
    /// Root directory holding `assets/`.
    pub assets_base_path: PathBuf,
    pub no_opt_svg: bool,
    pub build: BuildInfo,
}

impl ServiceConfig {
    /// Configuration with defaults for everything except the assets root.
    pub fn new(assets_base_path: impl Into<PathBuf>) -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 4000)),
            assets_base_path: assets_base_path.into(),
            no_opt_svg: false,
            build: BuildInfo::default(),
        }
    }

    /// Resolve parsed arguments, reading version metadata from the
    /// environment.
    pub fn from_args(args: &Args) -> Result<Self> {
        let listen_addr = resolve_listen_addr(&args.listen, args.port)?;

        let assets_base_path = match &args.assets_base_path {
            Some(path) => absolute(path)?,
            None => std::env::current_dir().context("Failed to read working directory")?,
        };

        Ok(Self {
            listen_addr,
            assets_base_path,
            no_opt_svg: args.no_opt_svg,
            build: BuildInfo::from_env(),
        })
    }

    /// Directory holding the wind arrow glyph.
    pub fn assets_dir(&self) -> PathBuf {
        self.assets_base_path.join("assets")
    }

    /// Directory holding weather symbol fragments.
    pub fn elements_dir(&self) -> PathBuf {
        self.assets_dir().join("elements")
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            skip_optimization: self.no_opt_svg,
        }
    }

    /// Log the asset layout, warning about missing directories.
    ///
    /// Returns the directories that do not exist.
    pub fn check_asset_dirs(&self) -> Vec<PathBuf> {
        let mut missing = Vec::new();
        for dir in [self.assets_dir(), self.elements_dir()] {
            if dir.is_dir() {
                info!(path = %dir.display(), "Asset directory found");
            } else {
                warn!(path = %dir.display(), "Asset directory does not exist");
                missing.push(dir);
            }
        }
        missing
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    Ok(cwd.join(path))
}
