//! # g3vcu-core
//!
//! Core library for patching Ninebot MAX G3 VCU memory dumps.
//!
//! This crate provides:
//! - Dump layout tables and firmware profiles
//! - Bounds-checked byte / little-endian access to dump buffers
//! - Serial number scanning and replacement
//! - Dump validation (exact size and reference header)
//! - Field edits: serial, mileage, speed limit, secret key transfer
//! - Session orchestration behind a `Prompter` trait
//!
//! All edits happen on an in-memory copy; the input file is never written.

pub mod buffer;
pub mod dump;
pub mod editor;
pub mod error;
pub mod layout;
pub mod serial;
pub mod session;
pub mod validate;

pub use dump::{Dump, DumpReport, KeySample, PATCHED_SUFFIX, patched_path};
pub use editor::{
    FieldEditor, KeyTransfer, Mileage, MileageChange, SecretKey, SerialChange, SpeedChange,
    normalize_serial,
};
pub use error::{Error, KeySide, Result};
pub use layout::{
    Encoding, FirmwareProfile, FirmwareVersion, OffsetField, OffsetTable, ReferenceHeader,
    SerialPattern, load_profile, save_profile,
};
pub use serial::{SerialOccurrence, SerialScanner, find_serials, replace_serials};
pub use session::{
    Edit, PatchPlan, Prompter, Session, SessionOutcome, choose_firmware, choose_input, is_yes,
    template_path,
};
pub use validate::{validate, validate_header_file};
