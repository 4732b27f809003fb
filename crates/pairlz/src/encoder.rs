//! Two encoding policies over the shared wire format: a greedy
//! back-reference encoder and a literal-only baseline.

use tracing::debug;

use crate::error::{EncodeError, Result};
use crate::token::{Token, TOKEN_SIZE};

/// Encode with greedy first-occurrence matching, serialized to wire bytes.
pub fn encode(input: &[u8]) -> Result<Vec<u8>> {
    Ok(to_wire(&encode_tokens(input)?))
}

/// Encode every byte as a literal token, serialized to wire bytes.
///
/// No lookback and no state: the output is always exactly twice the input
/// length. Serves as the baseline correctness oracle for the wire format.
pub fn encode_simple(input: &[u8]) -> Vec<u8> {
    to_wire(&encode_simple_tokens(input))
}

/// Literal-only tokenization of the input.
pub fn encode_simple_tokens(input: &[u8]) -> Vec<Token> {
    input.iter().map(|&b| Token::Literal(b)).collect()
}

/// Greedy first-occurrence tokenization of the input.
///
/// At each cursor position the encoder looks for the leftmost earlier
/// occurrence of the current byte, then extends the match while the seen
/// prefix keeps agreeing with the text at the cursor. The match stops growing
/// before it can reach the cursor, so every emitted copy refers strictly to
/// already-produced output. The leftmost occurrence is part of the format: a
/// later occurrence may compress better, but the token stream is pinned to
/// the deterministic first-occurrence choice.
///
/// Fails if a computed distance or length does not fit the one-byte token
/// field. The format has no representation for longer references, and
/// wrapping the value would corrupt the stream undetectably.
pub fn encode_tokens(input: &[u8]) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < input.len() {
        let b = input[i];
        let Some(p) = input[..i].iter().position(|&x| x == b) else {
            tokens.push(Token::Literal(b));
            i += 1;
            continue;
        };

        let distance = i - p;
        let mut length = 1;
        while i + length <= input.len() && input[p..p + length] == input[i..i + length] {
            length += 1;
            if p + length >= i {
                break;
            }
        }
        length -= 1;

        tokens.push(Token::Copy {
            distance: u8::try_from(distance)
                .map_err(|_| EncodeError::DistanceOverflow { distance, offset: i })?,
            count: u8::try_from(length)
                .map_err(|_| EncodeError::LengthOverflow { length, offset: i })?,
        });
        i += length;
    }
    debug!(bytes_in = input.len(), tokens = tokens.len(), "encoded input");
    Ok(tokens)
}

fn to_wire(tokens: &[Token]) -> Vec<u8> {
    let mut wire = Vec::with_capacity(tokens.len() * TOKEN_SIZE);
    for token in tokens {
        wire.extend_from_slice(&token.to_pair());
    }
    wire
}
