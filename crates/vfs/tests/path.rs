//! 路径辅助函数测试

use vfs::{ROOT_PATH, entry_path, is_root, strip_root};

#[test]
fn test_is_root() {
    assert!(is_root("/"));
    assert!(is_root(ROOT_PATH));
    assert!(!is_root(""));
    assert!(!is_root("//"));
    assert!(!is_root("/1"));
}

#[test]
fn test_strip_root_single_separator() {
    assert_eq!(strip_root("/1234"), "1234");
    assert_eq!(strip_root("1234"), "1234");
    assert_eq!(strip_root("/"), "");
}

#[test]
fn test_strip_root_keeps_inner_separators() {
    assert_eq!(strip_root("//12"), "/12");
    assert_eq!(strip_root("/12/34"), "12/34");
}

#[test]
fn test_entry_path() {
    assert_eq!(entry_path("4321"), "/4321");
    assert_eq!(entry_path(""), "/");
    assert_eq!(strip_root(&entry_path("77")), "77");
}
