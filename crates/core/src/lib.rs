//! bitweave-core: stride-4 bit-interleaving codec between text and 32-bit codes
//!
//! This library converts a string into one 32-bit integer per chunk of at
//! most four characters, and losslessly back. Rather than packing bytes
//! contiguously, each byte's bits are spread across its chunk's code at a
//! fixed stride of four positions.
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `bits`: single-bit set/get and width helpers
//! - `chunk`: lazy character chunker
//! - `codec`: chunk <-> code interleaving (encode/decode)
//! - `dispatch`: input classification and one-call transcoding
//! - `error`: structured error taxonomy
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Pure**: no I/O, no shared state; every call is independent and
//!   trivially safe to run concurrently
//! - **Explicit width checks**: integers wider than a code are rejected,
//!   never truncated

pub mod bits;
pub mod chunk;
pub mod codec;
pub mod dispatch;
pub mod error;

// Re-export commonly used items
pub use chunk::chunk;
pub use codec::{decode, encode};
pub use dispatch::{classify, transcode, Classified};
pub use error::{Error, Result};
