//! Serial number discovery and replacement
//!
//! Serial numbers are not stored at fixed offsets: every image carries an
//! unknown number of copies. They are located by scanning for the ASCII
//! prefix and taking the fixed-width window that follows it. One placeholder
//! value (the sentinel) is present in every image and must never change.
//!
//! Scanning never overlaps: after a window has been matched (sentinel or
//! not) the scan resumes right after it.

use memchr::memmem;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::layout::SerialPattern;

/// A serial number found in a buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SerialOccurrence {
    pub offset: usize,
    #[serde(serialize_with = "serialize_lossy")]
    pub value: Vec<u8>,
}

impl SerialOccurrence {
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.value).into_owned()
    }
}

fn serialize_lossy<S: serde::Serializer>(value: &[u8], s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&String::from_utf8_lossy(value))
}

/// Prefix-driven scanner over an unstructured byte buffer
pub struct SerialScanner<'a> {
    pattern: &'a SerialPattern,
    finder: memmem::Finder<'a>,
}

impl<'a> SerialScanner<'a> {
    pub fn new(pattern: &'a SerialPattern) -> Self {
        Self {
            pattern,
            finder: memmem::Finder::new(pattern.prefix_bytes()),
        }
    }

    /// Start offsets of every matched window, flagged `true` for the sentinel
    fn windows(&self, buf: &[u8]) -> Vec<(usize, bool)> {
        let width = self.pattern.length;
        let prefix_len = self.pattern.prefix_bytes().len();
        let sentinel = self.pattern.sentinel_bytes();

        let mut found = Vec::new();
        if buf.len() < width || prefix_len == 0 || prefix_len > width {
            return found;
        }

        // Windows may start at most here
        let last = buf.len() - width;
        let mut cursor = 0;
        while cursor <= last {
            let Some(rel) = self.finder.find(&buf[cursor..last + prefix_len]) else {
                break;
            };
            let pos = cursor + rel;
            let is_sentinel = &buf[pos..pos + width] == sentinel;
            found.push((pos, is_sentinel));
            cursor = pos + width;
        }
        found
    }

    /// All non-sentinel serials, in buffer order
    pub fn find(&self, buf: &[u8]) -> Vec<SerialOccurrence> {
        let width = self.pattern.length;
        self.windows(buf)
            .into_iter()
            .filter_map(|(offset, is_sentinel)| {
                if is_sentinel {
                    debug!("Skipping sentinel serial at 0x{:X}", offset);
                    return None;
                }
                Some(SerialOccurrence {
                    offset,
                    value: buf[offset..offset + width].to_vec(),
                })
            })
            .collect()
    }

    /// Overwrite every non-sentinel serial with `new_serial`.
    ///
    /// Returns the number of windows replaced. Fails with
    /// [`Error::NoReplacements`] and leaves the buffer untouched when none
    /// were found.
    pub fn replace(&self, buf: &mut [u8], new_serial: &[u8]) -> Result<usize> {
        let width = self.pattern.length;
        if new_serial.len() != width {
            return Err(Error::InvalidFormat(format!(
                "expected {} bytes, got {}",
                width,
                new_serial.len()
            )));
        }

        let targets: Vec<usize> = self
            .windows(buf)
            .into_iter()
            .filter(|&(_, is_sentinel)| !is_sentinel)
            .map(|(offset, _)| offset)
            .collect();

        if targets.is_empty() {
            return Err(Error::NoReplacements);
        }

        for &offset in &targets {
            debug!("Replacing serial at 0x{:X}", offset);
            buf[offset..offset + width].copy_from_slice(new_serial);
        }
        Ok(targets.len())
    }
}

pub fn find_serials(buf: &[u8], pattern: &SerialPattern) -> Vec<SerialOccurrence> {
    SerialScanner::new(pattern).find(buf)
}

pub fn replace_serials(buf: &mut [u8], pattern: &SerialPattern, new_serial: &[u8]) -> Result<usize> {
    SerialScanner::new(pattern).replace(buf, new_serial)
}
