//! 路径辅助函数
//!
//! pidfs 只有一层目录：挂载点根目录 `/` 以及其下的进程条目 `/<pid>`。

use alloc::string::String;

/// 路径分隔符
pub const SEPARATOR: char = '/';

/// 根目录路径
pub const ROOT_PATH: &str = "/";

/// 是否为根目录
pub fn is_root(path: &str) -> bool {
    path == ROOT_PATH
}

/// 去掉一个前导分隔符
///
/// 只去掉一个：`"//12"` 得到 `"/12"`，与逐字符校验的语义保持一致。
pub fn strip_root(path: &str) -> &str {
    path.strip_prefix(SEPARATOR).unwrap_or(path)
}

/// 由根目录下的条目名构造绝对路径
pub fn entry_path(name: &str) -> String {
    let mut path = String::with_capacity(name.len() + 1);
    path.push(SEPARATOR);
    path.push_str(name);
    path
}
