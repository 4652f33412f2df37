//! Hex offset parsing utilities.

use anyhow::Result;

/// Parse a hex offset string (with or without 0x prefix).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_hex_offset("0x1F5B4").unwrap(), 0x1F5B4);
/// assert_eq!(parse_hex_offset("1f5b4").unwrap(), 0x1F5B4);
/// ```
pub fn parse_hex_offset(s: &str) -> Result<usize> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    usize::from_str_radix(digits, 16).map_err(|e| anyhow::anyhow!("Invalid hex offset {:?}: {}", s, e))
}
