use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MidiError>;

/// Everything that can abort a decode. None of these are recoverable;
/// the caller reports and exits.
#[derive(Debug, Error)]
pub enum MidiError {
    #[error("cannot find {expected} magic")]
    BadMagic { expected: &'static str },

    #[error("unexpected end of file")]
    UnexpectedEof,

    #[error("SMPTE time offset is not supported")]
    UnsupportedSmpteOffset,

    #[error(transparent)]
    Io(#[from] io::Error),
}
