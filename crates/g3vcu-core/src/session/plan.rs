use std::fmt;
use std::path::PathBuf;

use crate::editor::{KeyTransfer, MileageChange, SerialChange, SpeedChange};

/// Edits to apply without prompting
///
/// Values are kept as operator text so they go through exactly the same
/// validation as interactive answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchPlan {
    pub serial: Option<String>,
    pub mileage: Option<String>,
    pub speed: Option<String>,
    pub key_source: Option<PathBuf>,
}

impl PatchPlan {
    pub fn is_empty(&self) -> bool {
        self.serial.is_none()
            && self.mileage.is_none()
            && self.speed.is_none()
            && self.key_source.is_none()
    }
}

/// One applied edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Serial(SerialChange),
    Mileage(MileageChange),
    Speed(SpeedChange),
    Key(KeyTransfer),
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Serial(change) => change.fmt(f),
            Edit::Mileage(change) => change.fmt(f),
            Edit::Speed(change) => change.fmt(f),
            Edit::Key(change) => change.fmt(f),
        }
    }
}
