use crate::proc::is_valid_entry_name;

#[test]
fn test_digits_are_valid() {
    assert!(is_valid_entry_name("1234"));
    assert!(is_valid_entry_name("0"));
    assert!(is_valid_entry_name("007"));
    assert!(is_valid_entry_name("99999999999999999999999999999999"));
}

#[test]
fn test_leading_separator_is_valid() {
    assert!(is_valid_entry_name("/99"));
    assert!(is_valid_entry_name("/"));
    assert!(is_valid_entry_name("///"));
}

#[test]
fn test_non_digit_is_invalid() {
    assert!(!is_valid_entry_name("12a4"));
    assert!(!is_valid_entry_name("self"));
    assert!(!is_valid_entry_name("/12 "));
    assert!(!is_valid_entry_name("-1"));
    assert!(!is_valid_entry_name("+1"));
    assert!(!is_valid_entry_name("1.0"));
    assert!(!is_valid_entry_name(".."));
}

#[test]
fn test_empty_is_invalid() {
    assert!(!is_valid_entry_name(""));
}

#[test]
fn test_non_ascii_digits_are_invalid() {
    // 全角数字与阿拉伯-印度数字都不是 ASCII 数字
    assert!(!is_valid_entry_name("１２"));
    assert!(!is_valid_entry_name("٣"));
}
