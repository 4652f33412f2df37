//! Bounds-checked primitive access to dump buffers

mod codec;

pub use codec::*;
