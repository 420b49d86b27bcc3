//! 源文本位置追踪
//!
//! 行号/列号为 1-based，用于人类可读的错误显示；
//! offset 为 0-based 偏移，用于文件跳转

use std::fmt;

/// 源文本位置
///
/// 纯值类型，构造后不再修改，按值复制到每个使用点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 行号，1-based，用于错误显示
    pub line: usize,
    /// 列号，1-based，用于错误显示；
    /// 字面量构造出的 0 表示列号缺失，显示时仅给出行号
    pub column: usize,
    /// 偏移，0-based，原样存储
    pub offset: usize,
}

impl Position {
    /// 创建新位置
    ///
    /// 行号/列号传入 0 时修正为 1，offset 不做修正
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line: if line == 0 { 1 } else { line },
            column: if column == 0 { 1 } else { column },
            offset,
        }
    }

    /// 文本起始位置
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    /// 诊断用的位置描述
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.column > 0 {
            write!(f, "on line {} at column {}", self.line, self.column)
        } else {
            write!(f, "on line {}", self.line)
        }
    }
}
