//! Token data model: the 2-byte (distance, value) wire unit and its decode
//! semantics.

/// Width of one token on the wire.
pub const TOKEN_SIZE: usize = 2;

/// Byte substituted by the decoder for an unparseable trailing fragment.
pub const PLACEHOLDER: u8 = b'?';

/// One unit of the wire format.
///
/// A pair `(0, q)` carries the literal byte `q`. A pair `(p, q)` with `p > 0`
/// copies up to `q` bytes starting `p` bytes before the current end of the
/// decoded output. Tokens are fixed width: no escaping, no variable length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A raw byte.
    Literal(u8),
    /// A back-reference: copy `count` bytes from `distance` bytes back.
    Copy { distance: u8, count: u8 },
}

impl Token {
    /// Read a token from its wire pair. Total: every pair is a valid token.
    pub fn from_pair(pair: [u8; TOKEN_SIZE]) -> Self {
        match pair {
            [0, value] => Token::Literal(value),
            [distance, count] => Token::Copy { distance, count },
        }
    }

    /// Write the token back to its wire pair.
    pub fn to_pair(self) -> [u8; TOKEN_SIZE] {
        match self {
            Token::Literal(value) => [0, value],
            Token::Copy { distance, count } => [distance, count],
        }
    }

    /// Apply the token to the growing output buffer.
    ///
    /// A copy whose `distance` reaches past the start of the buffer degrades
    /// to a window over the whole buffer, and a `count` larger than the
    /// window copies only the window; a copy never pads, wraps, or overlaps
    /// into bytes it produces itself. Both clamps are pinned by the wire
    /// format and must not be widened into a longer reconstruction.
    pub fn apply(self, out: &mut Vec<u8>) {
        match self {
            Token::Literal(value) => out.push(value),
            Token::Copy { distance, count } => {
                let start = out.len().saturating_sub(distance as usize);
                let end = (start + count as usize).min(out.len());
                out.extend_from_within(start..end);
            }
        }
    }
}
