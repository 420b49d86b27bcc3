//! 测试辅助工具
//!
//! 提供编解码集成测试的辅助函数

use neon_core::{decode, encode, DecodeError, Position};

/// 以起始位置解码，期望成功
pub fn decode_ok(literal: &str) -> String {
    match decode(literal, Position::start()) {
        Ok(value) => value,
        Err(e) => panic!("decode failed for {:?}: {}", literal, e),
    }
}

/// 以起始位置解码，期望失败
pub fn decode_err(literal: &str) -> DecodeError {
    match decode(literal, Position::start()) {
        Ok(value) => panic!("decode unexpectedly succeeded for {:?}: {:?}", literal, value),
        Err(e) => e,
    }
}

/// 编码后立即解码
pub fn roundtrip(value: &str) -> String {
    let literal = encode(value);
    match decode(&literal, Position::start()) {
        Ok(decoded) => decoded,
        Err(e) => panic!(
            "round-trip decode failed for {:?} (literal {:?}): {}",
            value, literal, e
        ),
    }
}
