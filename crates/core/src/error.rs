//! Error types for the bitweave codec.
//!
//! All operations return structured errors rather than panicking.
//! This keeps the library usable from any boundary (CLI, service, tests)
//! without catch-unwind plumbing.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Codec: chunk/code conversion failures
/// - Input: a boundary-level usage problem (e.g. forcing decode on text)
/// - I/O: file or stream operations, which only the CLI performs
#[derive(Debug, Error)]
pub enum Error {
    /// Codec failure (oversized chunk, oversized code, unencodable character)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Boundary usage error
    #[error("input error: {0}")]
    Input(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Codec-level errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A chunk presented to the single-chunk encoder exceeds the maximum
    /// length. Unreachable through the public chunker; indicates a bug in
    /// the caller, not bad user input.
    #[error("chunk of {length} characters exceeds maximum {max}")]
    ChunkTooLong { length: usize, max: usize },

    /// A decode input has more than 32 significant bits and therefore
    /// cannot have been produced by the encoder. Rejected rather than
    /// truncated; recoverable at the boundary by falling back to the
    /// encode direction.
    #[error("integer of {bits} bits exceeds the 32-bit code width")]
    IntegerTooWide { bits: u32 },

    /// A character above U+00FF has no single-byte representation in the
    /// codec's fixed Latin-1 text encoding.
    #[error("character {ch:?} has no single-byte representation")]
    UnencodableChar { ch: char },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
