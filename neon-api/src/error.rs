//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use thiserror::Error;

/// 解码错误（结构化）
pub use neon_core::DecodeError;

/// Neon 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NeonError {
    /// 字符串字面量解码错误（结构化）
    #[error("{0}")]
    Decode(#[from] DecodeError),
}

impl NeonError {
    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            NeonError::Decode(e) => Some(e.position().line),
        }
    }

    /// 获取错误列号（如果有）
    ///
    /// 列号 0 表示来源只有行号信息
    pub fn column(&self) -> Option<usize> {
        match self {
            NeonError::Decode(e) => match e.position().column {
                0 => None,
                column => Some(column),
            },
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            NeonError::Decode(_) => "decode",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// 适用于 Web API、LSP 等需要结构化数据的场景。
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        match self {
            NeonError::Decode(e) => ErrorReport {
                phase: self.phase(),
                line: self.line(),
                column: self.column(),
                error_kind: match e {
                    DecodeError::InvalidEscape { .. } => "InvalidEscape".to_string(),
                },
                message: e.to_string(),
            },
        }
    }
}

/// 结构化错误报告
///
/// 上层应用（CLI、Web、LSP）可以根据自己的需求格式化。
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    /// 错误阶段: decode
    pub phase: &'static str,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(
                    f,
                    "[{}:{}] {} error: {}",
                    line, col, self.phase, self.message
                )
            }
            _ => write!(f, "[{}] {} error: {}", self.phase, self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式（Web API 使用）
    ///
    /// 不依赖 serde，手动构建 JSON 字符串。
    pub fn to_json(&self) -> String {
        let line = self
            .line
            .map(|l| l.to_string())
            .unwrap_or_else(|| "null".to_string());
        let col = self
            .column
            .map(|c| c.to_string())
            .unwrap_or_else(|| "null".to_string());

        format!(
            r#"{{"phase":"{}","line":{},"column":{},"error_kind":"{}","message":"{}"}}"#,
            self.phase,
            line,
            col,
            escape_json(&self.error_kind),
            escape_json(&self.message)
        )
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}

/// 简单的 JSON 字符串转义
fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
