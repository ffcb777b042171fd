//! Engine configuration that downstream crates can serialize/deserialize.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How the final table is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Jsonl,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            other => Err(Error::Config(format!("unknown output format '{other}'"))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Jsonl => f.write_str("jsonl"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Field delimiter for input files.
    pub delimiter: u8,

    /// Field delimiter for CSV output.
    pub output_delimiter: u8,

    /// Strip surrounding whitespace from every input field.
    pub trim_fields: bool,

    pub output_format: OutputFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            output_delimiter: b',',
            trim_fields: false,
            output_format: OutputFormat::Csv,
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `CSVQ_DELIMITER`: input delimiter (single byte or `tab`/`comma`/`semicolon`/`pipe`)
    /// - `CSVQ_OUTPUT_DELIMITER`: output delimiter, same syntax
    /// - `CSVQ_TRIM`: `1`/`true` to trim input fields
    /// - `CSVQ_OUTPUT_FORMAT`: `csv` or `jsonl`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("CSVQ_DELIMITER") {
            if let Ok(d) = parse_delimiter(&s) {
                cfg.delimiter = d;
            }
        }

        if let Ok(s) = std::env::var("CSVQ_OUTPUT_DELIMITER") {
            if let Ok(d) = parse_delimiter(&s) {
                cfg.output_delimiter = d;
            }
        }

        if let Ok(s) = std::env::var("CSVQ_TRIM") {
            if let Some(v) = parse_flag(&s) {
                cfg.trim_fields = v;
            }
        }

        if let Ok(s) = std::env::var("CSVQ_OUTPUT_FORMAT") {
            if let Ok(v) = s.parse::<OutputFormat>() {
                cfg.output_format = v;
            }
        }

        cfg
    }
}

/// Parse a delimiter given either as a single ASCII character or by name.
pub fn parse_delimiter(s: &str) -> Result<u8> {
    match s {
        "tab" | "\\t" => return Ok(b'\t'),
        "comma" => return Ok(b','),
        "semicolon" => return Ok(b';'),
        "pipe" => return Ok(b'|'),
        _ => {}
    }
    match s.as_bytes() {
        [b] if b.is_ascii() && *b != b'\n' && *b != b'\r' => Ok(*b),
        _ => Err(Error::Config(format!(
            "delimiter must be a single ASCII character, got '{s}'"
        ))),
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
