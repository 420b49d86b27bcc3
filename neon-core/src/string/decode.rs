//! 字面量解码
//!
//! 调用方保证传入完整且定界正确的字面量切片，
//! 这里只负责去定界、去缩进和转义替换

use std::iter::Peekable;
use std::str::Chars;

use tracing::{debug, trace};

use super::error::DecodeError;
use super::escape;
use crate::position::Position;

/// 解码字符串字面量
///
/// `literal` 为含定界符的完整切片，`position` 为其起始位置，
/// 只用于错误上报，不参与解码本身
///
/// 定界风格：
/// - `'...'` 只识别 `''` 还原为 `'`，不做反斜杠转义
/// - `"..."` 做反斜杠转义
/// - `'''...'''` 和 `"""..."""` 为多行，去每行前导缩进后做反斜杠转义
pub fn decode(literal: &str, position: Position) -> Result<String, DecodeError> {
    // 单引号内容以引号开头时（如 '''' 和 '''ab'）会伪装成三引号前缀；
    // 多行路径要求首尾都是三连定界且总长不小于 6
    let triple = literal.len() >= 6
        && (literal.starts_with("'''") && literal.ends_with("'''")
            || literal.starts_with("\"\"\"") && literal.ends_with("\"\"\""));
    trace!(
        target: "neon::string",
        triple = triple,
        len = literal.len(),
        "Decoding string literal"
    );

    if triple {
        let body = dedent(&literal[3..literal.len() - 3]);
        return apply_escapes(&body, position);
    }

    let inner = &literal[1..literal.len() - 1];
    if literal.starts_with('\'') {
        // 单引号风格只有 '' 一种转义
        return Ok(inner.replace("''", "'"));
    }
    apply_escapes(inner, position)
}

/// 多行体去缩进
///
/// 第一行保持原样，其余每行去掉整段前导 tab/空格，
/// 与各行缩进深度无关；拼回后去掉整体首尾的换行
fn dedent(body: &str) -> String {
    let mut lines: Vec<&str> = body.split('\n').collect();
    for line in lines.iter_mut().skip(1) {
        *line = line.trim_start_matches(['\t', ' ']);
    }
    lines.join("\n").trim_matches('\n').to_string()
}

/// 替换转义序列
///
/// `\` 后接转义表字符或 `uHHHH`；
/// `\` 位于文本末尾或紧跟换行时不构成转义，原样保留
fn apply_escapes(text: &str, position: Position) -> Result<String, DecodeError> {
    if !text.contains('\\') {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            None | Some('\n') => out.push('\\'),
            Some('u') => {
                chars.next();
                out.push(unicode_escape(&mut chars, position)?);
            }
            Some(other) => {
                chars.next();
                match escape::replacement(other) {
                    Some(replaced) => out.push(replaced),
                    None => {
                        let sequence = format!("\\{}", other);
                        debug!(
                            target: "neon::string",
                            sequence = %sequence,
                            "Rejecting unknown escape sequence"
                        );
                        return Err(DecodeError::InvalidEscape { sequence, position });
                    }
                }
            }
        }
    }

    Ok(out)
}

/// 解码 `\u` 后的 4 位十六进制码点
///
/// 十六进制不足 4 位时报告 `\u`，码点非法时报告完整 6 字符序列
fn unicode_escape(
    chars: &mut Peekable<Chars<'_>>,
    position: Position,
) -> Result<char, DecodeError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.peek() {
            Some(h) if h.is_ascii_hexdigit() => {
                hex.push(*h);
                chars.next();
            }
            _ => {
                debug!(
                    target: "neon::string",
                    "Rejecting truncated unicode escape"
                );
                return Err(DecodeError::InvalidEscape {
                    sequence: "\\u".to_string(),
                    position,
                });
            }
        }
    }

    match escape::code_point(&hex) {
        Some(decoded) => Ok(decoded),
        None => {
            let sequence = format!("\\u{}", hex);
            debug!(
                target: "neon::string",
                sequence = %sequence,
                "Rejecting invalid code point"
            );
            Err(DecodeError::InvalidEscape { sequence, position })
        }
    }
}
