//! 条目名校验

use vfs::SEPARATOR;

/// 判断 `name` 是否可作为进程条目名
///
/// 纯词法检查：非空，且每个字符都是十进制数字或路径分隔符。
/// 不检查数值是否像一个真实的进程号，前导零、`0` 和超长数字串都视为合法。
///
/// ```
/// use fs::is_valid_entry_name;
///
/// assert!(is_valid_entry_name("1234"));
/// assert!(is_valid_entry_name("/99"));
/// assert!(!is_valid_entry_name("12a4"));
/// assert!(!is_valid_entry_name(""));
/// ```
pub fn is_valid_entry_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_digit() || c == SEPARATOR)
}
