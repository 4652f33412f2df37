//! Dump validation.
//!
//! A dump is accepted only if it has the exact expected size and starts with
//! the reference header. Size is always checked first so a short buffer is
//! rejected before any header comparison.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::layout::{FirmwareProfile, ReferenceHeader};

/// Check size, then header signature
pub fn validate(buf: &[u8], profile: &FirmwareProfile) -> Result<()> {
    check_size(buf, profile.dump_size)?;
    check_header(buf, &profile.header)
}

pub fn check_size(buf: &[u8], expected: usize) -> Result<()> {
    if buf.len() != expected {
        return Err(Error::WrongSize {
            expected,
            actual: buf.len(),
        });
    }
    Ok(())
}

pub fn check_header(buf: &[u8], header: &ReferenceHeader) -> Result<()> {
    match header.first_mismatch(buf) {
        Some(offset) => {
            debug!("Header mismatch at 0x{:X}", offset);
            Err(Error::HeaderMismatch { offset })
        }
        None => Ok(()),
    }
}

/// Compare the leading bytes of a file against the header without loading
/// the whole file.
///
/// Returns `Ok(false)` for a file shorter than the header.
pub fn validate_header_file<P: AsRef<Path>>(path: P, header: &ReferenceHeader) -> Result<bool> {
    let file = File::open(path.as_ref())?;
    let mut prefix = Vec::with_capacity(header.len());
    file.take(header.len() as u64).read_to_end(&mut prefix)?;
    Ok(header.first_mismatch(&prefix).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FirmwareVersion;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn profile() -> FirmwareProfile {
        FirmwareProfile::builtin(FirmwareVersion::V148).unwrap()
    }

    fn valid_dump(profile: &FirmwareProfile) -> Vec<u8> {
        let mut buf = vec![0u8; profile.dump_size];
        buf[..profile.header.len()].copy_from_slice(profile.header.as_bytes());
        buf
    }

    #[test]
    fn test_valid_dump_passes() {
        let profile = profile();
        validate(&valid_dump(&profile), &profile).unwrap();
    }

    #[test]
    fn test_any_header_byte_flip_is_mismatch() {
        let profile = profile();
        let dump = valid_dump(&profile);
        for offset in [0, 1, 100, profile.header.len() / 2, profile.header.len() - 1] {
            let mut bad = dump.clone();
            bad[offset] ^= 0x01;
            assert!(matches!(
                validate(&bad, &profile),
                Err(Error::HeaderMismatch { offset: o }) if o == offset
            ));
        }
    }

    #[test]
    fn test_byte_after_header_is_ignored() {
        let profile = profile();
        let mut dump = valid_dump(&profile);
        dump[profile.header.len()] = 0xAA;
        validate(&dump, &profile).unwrap();
    }

    #[test]
    fn test_wrong_size_boundaries() {
        let profile = profile();
        for len in [0x20000 - 1, 0x20000 + 1, 0] {
            let buf = vec![0u8; len];
            assert!(matches!(
                validate(&buf, &profile),
                Err(Error::WrongSize { expected: 0x20000, actual }) if actual == len
            ));
        }
    }

    #[test]
    fn test_size_checked_before_header() {
        let profile = profile();
        // Short buffer with a garbage header still reports the size problem
        let buf = vec![0xEEu8; 16];
        assert!(matches!(validate(&buf, &profile), Err(Error::WrongSize { .. })));
    }

    #[test]
    fn test_validate_header_file() {
        let profile = profile();
        let mut good = NamedTempFile::new().unwrap();
        good.write_all(&valid_dump(&profile)).unwrap();
        assert!(validate_header_file(good.path(), &profile.header).unwrap());

        let mut short = NamedTempFile::new().unwrap();
        short.write_all(&profile.header.as_bytes()[..10]).unwrap();
        assert!(!validate_header_file(short.path(), &profile.header).unwrap());

        let err = validate_header_file("/nonexistent/dump.bin", &profile.header).unwrap_err();
        assert!(err.is_not_found());
    }
}
