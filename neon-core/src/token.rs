//! Token 类型定义
//!
//! 外部分词器产出的词法单元：类别、原始文本、起始位置

use crate::position::Position;

/// Token 类别
///
/// 判别值是对外约定的一部分，End 固定为 -1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd)]
#[repr(i8)]
pub enum TokenKind {
    /// 单个标点字符
    Char = 0,
    /// 字符串字面量
    String = 1,
    /// 裸字面量（数字、布尔、裸标量等）
    Literal = 2,
    /// 注释
    Comment = 3,
    /// 换行
    Newline = 4,
    /// 行内空白
    Whitespace = 5,
    /// 输入结束
    End = -1,
}

impl TokenKind {
    /// 日志/诊断用的短名称
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Char => "char",
            TokenKind::String => "string",
            TokenKind::Literal => "literal",
            TokenKind::Comment => "comment",
            TokenKind::Newline => "newline",
            TokenKind::Whitespace => "whitespace",
            TokenKind::End => "end",
        }
    }
}

impl From<TokenKind> for i8 {
    fn from(val: TokenKind) -> Self {
        val as i8
    }
}

/// Token 结构
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// 原始文本（字符串 token 为含定界符的完整字面量切片）
    pub text: String,
    /// 起始位置
    pub position: Position,
}

impl Token {
    /// 创建新 token
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// 是否为指定类别
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// 是否属于类别集合
    pub fn is_in(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
