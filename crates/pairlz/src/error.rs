//! Encode-side failures. Decoding never fails: malformed input degrades to
//! clamped copies or a placeholder byte instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("back-reference distance {distance} at offset {offset} does not fit a one-byte token field")]
    DistanceOverflow { distance: usize, offset: usize },
    #[error("match length {length} at offset {offset} does not fit a one-byte token field")]
    LengthOverflow { length: usize, offset: usize },
}

pub type Result<T> = std::result::Result<T, EncodeError>;
