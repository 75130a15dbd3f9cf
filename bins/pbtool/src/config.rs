use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use robot_pb::{Codec, CodecConfig};

use crate::error::PbtoolError;

#[derive(Parser)]
#[command(name = "pbtool", about = "Encode and inspect robot-pb payloads")]
pub struct Cli {
    #[command(flatten)]
    pub codec: CodecArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// JSON in, protobuf bytes out
    Encode(EncodeArgs),
    /// Protobuf bytes in, text or JSON out
    Decode(DecodeArgs),
}

/// Top-level message a file holds.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shape {
    Variant,
    #[default]
    Dictionary,
}

#[derive(Args, Clone, Debug)]
pub struct CodecArgs {
    /// Path to the TOML config file [default: pbtool.toml, if present]
    #[arg(long, global = true, env = "PBTOOL_CONFIG")]
    pub config: Option<String>,

    /// Maximum dictionary nesting accepted on decode
    #[arg(long, global = true)]
    pub max_depth: Option<usize>,

    /// Range-check dates, timestamps, narrow integers and chars on decode
    #[arg(long, global = true)]
    pub validate_ranges: bool,
}

#[derive(Args, Clone, Debug)]
pub struct EncodeArgs {
    /// JSON file, `-` for stdin
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Output file, `-` for stdout
    #[arg(long, default_value = "-")]
    pub output: String,

    #[arg(long = "as", value_enum, default_value_t = Shape::default())]
    pub shape: Shape,
}

#[derive(Args, Clone, Debug)]
pub struct DecodeArgs {
    /// Encoded file, `-` for stdin
    #[arg(long, default_value = "-")]
    pub input: String,

    #[arg(long = "as", value_enum, default_value_t = Shape::default())]
    pub shape: Shape,

    /// Print JSON instead of the indented text form
    #[arg(long)]
    pub json: bool,
}

// ---- TOML Config ----

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub max_depth: Option<usize>,
    pub validate_ranges: Option<bool>,
}

pub fn load_config(path: &str) -> Result<Config, PbtoolError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PbtoolError::Config(format!("cannot read config {path}: {e}")))?;
    parse_config(path, &content)
}

fn parse_config(path: &str, content: &str) -> Result<Config, PbtoolError> {
    toml::from_str(content).map_err(|e| PbtoolError::Config(format!("bad config {path}: {e}")))
}

/// Loaded when no path is given; may be absent.
const DEFAULT_CONFIG: &str = "pbtool.toml";

/// An explicit path must exist. The default one is optional.
fn file_config(explicit: Option<&str>, default_path: &str) -> Result<Config, PbtoolError> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    if !std::path::Path::new(default_path).exists() {
        tracing::debug!(path = default_path, "no config file, using defaults");
        return Ok(Config::default());
    }
    load_config(default_path)
}

// ---- Effective ----

/// Config file values overridden by CLI flags.
pub struct Effective {
    pub codec: Codec,
}

impl Effective {
    pub fn new(args: &CodecArgs) -> Result<Self, PbtoolError> {
        let cfg = file_config(args.config.as_deref(), DEFAULT_CONFIG)?;
        Ok(Self::merge(args, cfg))
    }

    fn merge(args: &CodecArgs, cfg: Config) -> Self {
        let defaults = CodecConfig::default();
        let config = CodecConfig {
            max_depth: args.max_depth.or(cfg.max_depth).unwrap_or(defaults.max_depth),
            validate_ranges: args.validate_ranges
                || cfg.validate_ranges.unwrap_or(defaults.validate_ranges),
        };
        Self {
            codec: Codec::new(config),
        }
    }
}
