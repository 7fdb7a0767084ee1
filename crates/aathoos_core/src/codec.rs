//! Wire codec for records crossing the store boundary.
//!
//! # Responsibility
//! - Convert engine records (and arrays thereof) to and from the flat,
//!   language-neutral JSON encoding handed to callers.
//!
//! # Invariants
//! - Absent optional fields encode as an explicit `null`, never as an
//!   omitted key, so callers can distinguish "empty" from "absent".
//! - Decoding the encoding of any valid record reproduces an equal record.
//! - This layer knows nothing about the foreign calling convention.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::de::DeserializeOwned;
use serde::Serialize;

pub type CodecResult<T> = Result<T, CodecError>;

/// Encoding or decoding failure at the serialization layer.
#[derive(Debug)]
pub enum CodecError {
    Encode(serde_json::Error),
    Decode(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "record encoding failed: {err}"),
            Self::Decode(err) => write!(f, "record decoding failed: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}

/// Encodes one record or record list as the boundary's JSON text.
pub fn encode<T: Serialize>(value: &T) -> CodecResult<String> {
    serde_json::to_string(value).map_err(CodecError::Encode)
}

/// Decodes boundary JSON text back into a record or record list.
pub fn decode<T: DeserializeOwned>(encoded: &str) -> CodecResult<T> {
    serde_json::from_str(encoded).map_err(CodecError::Decode)
}
