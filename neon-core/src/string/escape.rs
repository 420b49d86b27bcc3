//! 转义表与码点解码

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 单字符转义表
///
/// 双引号风格的 `\x` 替换，`\_` 为不换行空格
static ESCAPE_TABLE: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HashMap::from([
        ('t', '\t'),
        ('n', '\n'),
        ('r', '\r'),
        ('f', '\u{0C}'),
        ('b', '\u{08}'),
        ('"', '"'),
        ('\\', '\\'),
        ('/', '/'),
        ('_', '\u{A0}'),
    ])
});

/// 查找单字符转义的替换字符
pub(crate) fn replacement(c: char) -> Option<char> {
    ESCAPE_TABLE.get(&c).copied()
}

/// 解码 `\uHHHH` 的 4 位十六进制码点
///
/// 代理区（U+D800 到 U+DFFF）不是合法码点，返回 None
pub(crate) fn code_point(hex: &str) -> Option<char> {
    let code = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_whitespace_escapes() {
        assert_eq!(replacement('t'), Some('\t'));
        assert_eq!(replacement('n'), Some('\n'));
        assert_eq!(replacement('r'), Some('\r'));
        assert_eq!(replacement('f'), Some('\u{0C}'));
        assert_eq!(replacement('b'), Some('\u{08}'));
    }

    #[test]
    fn test_table_literal_escapes() {
        assert_eq!(replacement('"'), Some('"'));
        assert_eq!(replacement('\\'), Some('\\'));
        assert_eq!(replacement('/'), Some('/'));
    }

    #[test]
    fn test_table_nbsp() {
        assert_eq!(replacement('_'), Some('\u{A0}'));
    }

    #[test]
    fn test_table_misses() {
        assert_eq!(replacement('q'), None);
        assert_eq!(replacement('x'), None);
        // u 走独立的码点解码路径，不在表里
        assert_eq!(replacement('u'), None);
    }

    #[test]
    fn test_code_point_ascii() {
        assert_eq!(code_point("0041"), Some('A'));
    }

    #[test]
    fn test_code_point_hex_case_insensitive() {
        assert_eq!(code_point("00e9"), Some('é'));
        assert_eq!(code_point("00E9"), Some('é'));
    }

    #[test]
    fn test_code_point_bmp() {
        assert_eq!(code_point("4e2d"), Some('中'));
    }

    #[test]
    fn test_code_point_rejects_surrogates() {
        assert_eq!(code_point("D800"), None);
        assert_eq!(code_point("dbff"), None);
        assert_eq!(code_point("DFFF"), None);
    }

    #[test]
    fn test_code_point_rejects_non_hex() {
        assert_eq!(code_point("zzzz"), None);
    }
}
