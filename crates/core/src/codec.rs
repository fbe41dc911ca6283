//! The stride-4 bit-interleaving codec.
//!
//! A chunk of at most four characters becomes one 32-bit code. The byte
//! at chunk-relative index `i` (0-based) owns bit positions
//! `i, i + 4, i + 8, ...` of the code: bit `b` of that byte (LSB = 0)
//! lands at absolute position `i + 4 * b`.
//!
//! # Bit Layout
//!
//! ```text
//! byte 0 -> positions {0, 4, 8, 12, 16, 20, 24, 28}
//! byte 1 -> positions {1, 5, 9, 13, 17, 21, 25, 29}
//! byte 2 -> positions {2, 6, 10, 14, 18, 22, 26, 30}
//! byte 3 -> positions {3, 7, 11, 15, 19, 23, 27, 31}
//! ```
//!
//! Bit 31 (byte 3, bit 7) is the highest position any chunk can set, so
//! every code fits in 32 bits and anything wider is rejected on decode.
//!
//! Text is treated as Latin-1: each character must fit a single byte.
//! Decoding drops reconstructed zero bytes, which is how chunks shorter
//! than four characters round-trip; an actual NUL in the source text is
//! dropped the same way, an accepted lossy edge case of the scheme.

use crate::bits::{bit_width, get_bit, set_bit};
use crate::chunk::chunk;
use crate::error::{CodecError, Result};

/// Maximum number of characters per chunk.
pub const MAX_CHUNK_LEN: usize = 4;

/// Distance between consecutive bits of the same byte within a code.
pub const BIT_STRIDE: u32 = 4;

/// Encode `text` into one 32-bit code per chunk of at most
/// [`MAX_CHUNK_LEN`] characters.
///
/// Codes are returned in chunk order; an empty string produces an empty
/// vector.
///
/// # Errors
/// Returns `CodecError::UnencodableChar` if any character is above U+00FF.
pub fn encode(text: &str) -> Result<Vec<u32>> {
    chunk(text, MAX_CHUNK_LEN).map(encode_chunk).collect()
}

/// Encode a single chunk of at most [`MAX_CHUNK_LEN`] characters.
///
/// Chunks produced by the public chunker never exceed the maximum; a
/// direct caller that presents a longer one gets
/// `CodecError::ChunkTooLong`.
pub fn encode_chunk(text: &str) -> Result<u32> {
    let length = text.chars().count();
    if length > MAX_CHUNK_LEN {
        return Err(CodecError::ChunkTooLong {
            length,
            max: MAX_CHUNK_LEN,
        }
        .into());
    }

    let mut code = 0u32;
    for (i, ch) in text.chars().enumerate() {
        let byte = byte_value(ch)?;

        // Scatter the byte's set bits along the code at stride intervals.
        for b in 0..u8::BITS {
            if (byte >> b) & 1 == 1 {
                code = set_bit(code, i as u32 + BIT_STRIDE * b);
            }
        }
    }

    Ok(code)
}

/// Decode a sequence of codes back into text.
///
/// Codes are processed independently and their chunks concatenated in
/// order.
///
/// # Errors
/// Returns `CodecError::IntegerTooWide` if any value has more than 32
/// significant bits; such a value cannot have been produced by [`encode`]
/// and is rejected rather than truncated.
pub fn decode(codes: &[u128]) -> Result<String> {
    let mut text = String::new();
    for &code in codes {
        text.push_str(&decode_code(code)?);
    }
    Ok(text)
}

/// Decode a single code into its 0-4 character chunk.
///
/// For each output byte index, gathers the code's bits at stride
/// intervals starting at that offset, lowest-order first. A byte that
/// reconstructs to 0 carried no character and is omitted.
pub fn decode_code(code: u128) -> Result<String> {
    let bits = bit_width(code);
    if bits > 32 {
        return Err(CodecError::IntegerTooWide { bits }.into());
    }
    let word = code as u32;

    let mut text = String::new();
    for i in 0..MAX_CHUNK_LEN as u32 {
        let mut byte = 0u8;
        for b in 0..u8::BITS {
            byte |= (get_bit(word, i + BIT_STRIDE * b) as u8) << b;
        }
        if byte != 0 {
            text.push(char::from(byte));
        }
    }

    Ok(text)
}

/// Map a character to its Latin-1 byte.
fn byte_value(ch: char) -> Result<u8> {
    u8::try_from(u32::from(ch)).map_err(|_| CodecError::UnencodableChar { ch }.into())
}
