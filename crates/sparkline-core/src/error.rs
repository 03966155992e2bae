// File: crates/sparkline-core/src/error.rs
// Summary: Error type shared by configuration loading and SVG output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SparklineError {
    #[error("invalid option `{name}`: {value} (must be positive and finite)")]
    InvalidOption { name: &'static str, value: f64 },

    #[error("failed to read config: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write SVG: {path}")]
    SvgWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SparklineError>;
