//! 字面量编码
//!
//! 值到字面量的全函数：按内容选择定界风格，任何字符串都可编码

use tracing::trace;

/// 编码字符串值为字面量
///
/// 决策顺序：
/// 1. 无换行：含 tab 以外的控制字符用 JSON 转义双引号，否则单引号（`'` 翻倍）
/// 2. 有换行且（含控制字符或含 `\n'''`）：JSON 转义正文包在 `"""` 中
/// 3. 有换行：每行加一个 tab 缩进，包在 `'''` 中
pub fn encode(value: &str) -> String {
    if !value.contains('\n') {
        if contains_control_chars(value) {
            trace!(target: "neon::string", style = "double-quoted", "Encoding string value");
            return json_escaped(value);
        }
        trace!(target: "neon::string", style = "single-quoted", "Encoding string value");
        return format!("'{}'", value.replace('\'', "''"));
    }

    if contains_control_chars(value) || value.contains("\n'''") {
        trace!(target: "neon::string", style = "triple-double-quoted", "Encoding string value");
        // 正文中不能出现 """，否则闭合定界符会被提前命中；
        // JSON 转义后不会有裸引号，这里的替换只处理这一不变量被破坏的情况
        let escaped = json_escaped_body(value).replace("\"\"\"", "\"\"\\\"");
        return format!("\"\"\"{}\"\"\"", escaped);
    }

    trace!(target: "neon::string", style = "multiline", "Encoding string value");
    let indented = value
        .split('\n')
        .map(|line| format!("\t{}", line))
        .collect::<Vec<_>>()
        .join("\n");
    format!("'''\n{}\n'''", indented)
}

/// 是否含 tab 与换行以外的控制字符
fn contains_control_chars(value: &str) -> bool {
    value
        .chars()
        .any(|c| c < '\u{20}' && c != '\n' && c != '\t')
}

/// 整串 JSON 转义，含外层双引号
fn json_escaped(value: &str) -> String {
    serde_json::to_string(value).expect("JSON string encoding never fails")
}

/// JSON 转义正文，去掉外层双引号
fn json_escaped_body(value: &str) -> String {
    let escaped = json_escaped(value);
    escaped[1..escaped.len() - 1].to_string()
}
