//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These are "boring bags of data"
//! - No GUI code
//! - No filesystem code
//!
//! `Track` is one catalog entry, `UploadedFile` is what the user handed us.

use std::fmt;
use std::sync::Arc;

/// Closed set of moods the catalog is bucketed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    Love,
    Folk,
}

impl Mood {
    /// Fallback when the uploaded name matches nothing.
    pub const DEFAULT: Mood = Mood::Love;

    pub fn label(self) -> &'static str {
        match self {
            Mood::Love => "Love",
            Mood::Folk => "Folk",
        }
    }

    /// Label shown in the UI after analysis.
    pub fn display(self) -> &'static str {
        match self {
            Mood::Love => "❤️ Love",
            Mood::Folk => "🌾 Folk",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog entry.
///
/// `file_ref` is a relative locator (ex: `songs/Uyirey.mp3`), resolved
/// against the configured songs root only when bytes are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Track {
    /// Human-readable name, also used for classification and export names.
    pub name: &'static str,
    pub file_ref: &'static str,
}

/// A file the user picked for analysis.
///
/// Lives for one upload cycle and is replaced wholesale by the next one.
#[derive(Clone)]
pub struct UploadedFile {
    /// File name as supplied (no directories).
    pub raw_name: String,
    /// Shared so GUI messages stay cheap to clone.
    pub bytes: Arc<[u8]>,
}

impl UploadedFile {
    pub fn new(raw_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            raw_name: raw_name.into(),
            bytes: bytes.into(),
        }
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("raw_name", &self.raw_name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
