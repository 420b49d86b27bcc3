//! Neon Core - Lexical layer of the NEON notation (pure logic, no IO)
//!
//! Contains the token vocabulary and the string literal codec.
//! Only operates on in-memory data structures, no file IO or terminal output.
//!
//! Positions are passed explicitly via parameters, not tracked via global state.

pub mod position;
pub mod string;
pub mod token;

// Re-export common types
pub use position::Position;
pub use string::{decode, encode, DecodeError};
pub use token::{Token, TokenKind};
