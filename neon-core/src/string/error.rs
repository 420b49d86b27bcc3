//! 解码错误类型

use crate::position::Position;
use thiserror::Error;

/// 字符串字面量解码错误
///
/// 解码失败即整个字面量作废，调用方应将其上报为致命解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// 非法转义序列
    #[error("Invalid escape sequence: {sequence} {position}")]
    InvalidEscape {
        /// 原样的转义文本（如 `\q`、`\u`、`\uD800`）
        sequence: String,
        /// 字面量的起始位置
        position: Position,
    },
}

impl DecodeError {
    /// 错误对应的字面量起始位置
    pub fn position(&self) -> Position {
        match self {
            DecodeError::InvalidEscape { position, .. } => *position,
        }
    }
}
