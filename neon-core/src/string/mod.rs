//! NEON 字符串字面量编解码
//!
//! 字面量切片与内存字符串值之间的双向转换：
//! decode 做去定界、去缩进和转义替换，encode 按内容选择定界风格

mod decode;
mod encode;
mod error;
mod escape;

pub use decode::decode;
pub use encode::encode;
pub use error::DecodeError;
