//! Value parsers bridging core types into clap

use std::str::FromStr;

use urbe_core::format::OutputFormat;
use urbe_core::tree::Traversal;

pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|e| e.to_string())
}

pub fn parse_traversal(s: &str) -> Result<Traversal, String> {
    Traversal::from_str(s)
}
