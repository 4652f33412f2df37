//! Hexdump command implementation.
//!
//! Displays dump bytes in traditional hexdump format, useful for checking
//! fields before and after patching.
//!
//! # Output Format
//!
//! ```text
//! 0x1F5B4: 48 65 6C 6C 6F 20 57 6F  72 6C 64 00 00 00 00 00  |Hello World.....|
//! ```

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use g3vcu_core::Dump;
use g3vcu_core::buffer::read_bytes;

use super::hex_utils::parse_hex_offset;

/// Run the hexdump command
pub fn run(file: &Path, offset: &str, size: usize, ascii: bool) -> Result<()> {
    let offset = parse_hex_offset(offset)?;
    let dump = Dump::load(file)?;

    // Clamp to the end of the file rather than failing on a long request
    let size = size.min(dump.len().saturating_sub(offset));
    let bytes = read_bytes(dump.as_bytes(), offset, size)?;

    println!("Hexdump at 0x{:X} ({} bytes):", offset, size);
    println!();
    print!("{}", format_hexdump(bytes, offset, ascii));

    Ok(())
}

/// Render `bytes` as 16-byte lines labelled from `base`
pub fn format_hexdump(bytes: &[u8], base: usize, ascii: bool) -> String {
    let mut out = String::new();

    for (i, chunk) in bytes.chunks(16).enumerate() {
        let _ = write!(out, "0x{:05X}: ", base + i * 16);

        for (j, byte) in chunk.iter().enumerate() {
            if j == 8 {
                out.push(' ');
            }
            let _ = write!(out, "{:02X} ", byte);
        }

        // Padding for incomplete lines
        for j in chunk.len()..16 {
            if j == 8 {
                out.push(' ');
            }
            out.push_str("   ");
        }

        if ascii {
            out.push_str(" |");
            for &byte in chunk {
                if (0x20..0x7F).contains(&byte) {
                    out.push(byte as char);
                } else {
                    out.push('.');
                }
            }
            for _ in chunk.len()..16 {
                out.push(' ');
            }
            out.push('|');
        }

        out.push('\n');
    }

    out
}
