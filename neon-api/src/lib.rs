//! Neon API - Caller-facing layer of the NEON notation
//!
//! Provides unified error handling (NeonError), structured error reports,
//! and convenience passthroughs to the core string codec.
//!
//! Embedders that implement their own tokenizer/parser can use neon-core
//! directly; this crate is the surface for hosts that only need
//! decode/encode plus diagnostics.

pub mod error;
pub use error::{DecodeError, ErrorReport, NeonError};

// Re-export core types
pub use neon_core::{Position, Token, TokenKind};

/// Decode a string literal span
///
/// The caller guarantees a complete, correctly delimited span; the
/// position is attached to any resulting error.
pub fn decode(literal: &str, position: Position) -> Result<String, NeonError> {
    Ok(neon_core::decode(literal, position)?)
}

/// Encode a string value into literal syntax
pub fn encode(value: &str) -> String {
    neon_core::encode(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_passthrough() {
        let value = decode("'it''s'", Position::start()).unwrap();
        assert_eq!(value, "it's");
    }

    #[test]
    fn test_decode_error_is_unified() {
        let err = decode("\"\\q\"", Position::new(2, 5, 10)).unwrap_err();
        assert_eq!(err.phase(), "decode");
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.column(), Some(5));
    }

    #[test]
    fn test_encode_passthrough() {
        assert_eq!(encode("x\ny"), "'''\n\tx\n\ty\n'''");
    }
}
