//! In-memory dump files
//!
//! A [`Dump`] owns the full byte image for the duration of one session. All
//! edits happen in memory; the only write is the final save to a sibling
//! `.patched.bin` file, so the input is never modified.

mod report;

pub use report::*;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::layout::FirmwareProfile;
use crate::validate;

/// Suffix appended to the input file name for the output
pub const PATCHED_SUFFIX: &str = ".patched.bin";

/// Output path for a given input: `<input>.patched.bin`
pub fn patched_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(PATCHED_SUFFIX);
    PathBuf::from(name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dump {
    path: Option<PathBuf>,
    data: Vec<u8>,
}

impl Dump {
    /// Read a whole dump file into memory
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        info!("Loaded {} ({} bytes)", path.display(), data.len());
        Ok(Self {
            path: Some(path.to_path_buf()),
            data,
        })
    }

    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { path: None, data }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn validate(&self, profile: &FirmwareProfile) -> Result<()> {
        validate::validate(&self.data, profile)
    }

    /// Where [`Dump::save_patched`] writes, if the dump came from a file
    pub fn patched_path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(patched_path)
    }

    /// Write the image next to its source as `<input>.patched.bin`.
    ///
    /// In-memory dumps have no source; they are written to `fallback`.
    pub fn save_patched(&self, fallback: &Path) -> Result<PathBuf> {
        let out = self.patched_path().unwrap_or_else(|| patched_path(fallback));
        self.save_as(&out)?;
        Ok(out)
    }

    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path.as_ref(), &self.data)?;
        info!("Wrote {} bytes to {}", self.data.len(), path.as_ref().display());
        Ok(())
    }
}
