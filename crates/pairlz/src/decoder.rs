//! Stream decoder: applies 2-byte tokens to a growing output buffer.

use std::io::{self, Read};

use tracing::{debug, trace};

use crate::token::{Token, PLACEHOLDER, TOKEN_SIZE};

/// Decode a complete token stream held in memory.
///
/// Walks the input two bytes at a time and applies each pair to the output
/// buffer. A dangling final byte that cannot form a pair is replaced by one
/// placeholder byte; the decoder never fails. A pair is either fully applied
/// or fully replaced, never partially applied.
pub fn decode(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut pairs = input.chunks_exact(TOKEN_SIZE);
    for pair in &mut pairs {
        Token::from_pair([pair[0], pair[1]]).apply(&mut out);
    }
    if !pairs.remainder().is_empty() {
        trace!(pos = out.len(), "dangling byte at end of stream, substituting placeholder");
        out.push(PLACEHOLDER);
    }
    debug!(bytes_in = input.len(), bytes_out = out.len(), "decoded stream");
    out
}

/// Decode a token stream incrementally from a reader.
///
/// Reads two bytes at a time with no buffering beyond the current pair.
/// Token-level anomalies recover locally: a short read at end of stream
/// becomes one placeholder byte and ends the loop. Transport errors from the
/// reader are not token anomalies and propagate.
pub fn decode_from<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut pair = [0u8; TOKEN_SIZE];
    loop {
        match read_pair(&mut reader, &mut pair)? {
            0 => break,
            TOKEN_SIZE => Token::from_pair(pair).apply(&mut out),
            _ => {
                trace!(pos = out.len(), "dangling byte at end of stream, substituting placeholder");
                out.push(PLACEHOLDER);
                break;
            }
        }
    }
    debug!(bytes_out = out.len(), "decoded stream");
    Ok(out)
}

/// Fill `pair` from the reader, retrying interrupted reads. Returns the
/// number of bytes obtained: [`TOKEN_SIZE`] for a full pair, less only at end
/// of stream.
fn read_pair<R: Read>(reader: &mut R, pair: &mut [u8; TOKEN_SIZE]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < TOKEN_SIZE {
        match reader.read(&mut pair[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
