//! core/error.rs
//! Errors from the I/O-bound collaborators (decode, export).
//!
//! Classification, selection and the playback session never fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to open: {0}")]
    Open(#[from] std::io::Error),

    #[error("not a recognized audio format: {0}")]
    Probe(#[source] symphonia::core::errors::Error),

    #[error("no supported audio track found")]
    NoTrack,

    #[error("decoder init failed: {0}")]
    Codec(#[source] symphonia::core::errors::Error),

    #[error("decode failed: {0}")]
    Decode(#[source] symphonia::core::errors::Error),

    #[error("no audio frames could be decoded")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read {path:?}: {source}")]
    Fetch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The playback thread is no longer receiving commands.
#[derive(Debug, Error)]
#[error("playback engine is not running")]
pub struct EngineGone;
