use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// First bytes of a genuine G3 VCU dump (vector table and startup code)
const G3_HEADER_HEX: &str = include_str!("reference_header.hex");

/// Expected leading bytes of a valid dump, used only for equality checks
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceHeader(Vec<u8>);

impl ReferenceHeader {
    /// Decode a header from a hex literal.
    ///
    /// Whitespace is ignored. A dangling trailing nibble is dropped rather
    /// than rejected.
    pub fn from_hex(text: &str) -> Result<Self> {
        let mut digits: String = text.split_whitespace().collect();
        if digits.len() % 2 != 0 {
            debug!("Header hex has odd length {}, dropping last nibble", digits.len());
            digits.pop();
        }
        if digits.is_empty() {
            return Err(Error::InvalidProfile("reference header is empty".to_string()));
        }

        let bytes = hex::decode(&digits)
            .map_err(|e| Error::InvalidProfile(format!("reference header: {}", e)))?;
        Ok(Self(bytes))
    }

    /// Header of the MAX G3 VCU firmware family
    pub fn g3() -> Result<Self> {
        Self::from_hex(G3_HEADER_HEX)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Offset of the first byte that differs from `data`, if any.
    ///
    /// Data shorter than the header mismatches at its own length.
    pub fn first_mismatch(&self, data: &[u8]) -> Option<usize> {
        if let Some(pos) = self.0.iter().zip(data).position(|(a, b)| a != b) {
            return Some(pos);
        }
        (data.len() < self.0.len()).then_some(data.len())
    }
}

impl fmt::Debug for ReferenceHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReferenceHeader({} bytes)", self.0.len())
    }
}

impl TryFrom<String> for ReferenceHeader {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<ReferenceHeader> for String {
    fn from(value: ReferenceHeader) -> Self {
        hex::encode_upper(value.0)
    }
}
