use super::*;
use crate::config::MAX_STATUS_SIZE;
use crate::proc::{SnapshotPool, StatusSource};

#[test]
fn test_snapshot_matches_host_content() {
    let table = create_test_table();
    let source = StatusSource::new(table.clone());

    let snapshot = source.snapshot("4321");
    assert_eq!(snapshot.as_bytes(), SHELL_STATUS.as_bytes());
    assert_eq!(source.size("1"), INIT_STATUS.len());
}

#[test]
fn test_leading_separator_is_stripped() {
    let table = create_test_table();
    let source = StatusSource::new(table.clone());

    assert_eq!(source.size("/4321"), SHELL_STATUS.len());
}

#[test]
fn test_missing_process_is_empty() {
    let table = create_test_table();
    let source = StatusSource::new(table.clone());

    assert!(source.snapshot("999").is_empty());
    assert!(source.snapshot("self").is_empty());
}

#[test]
fn test_empty_status_is_empty_snapshot() {
    let table = create_test_table();
    table.insert("77", b"");
    let source = StatusSource::new(table.clone());

    assert_eq!(source.size("77"), 0);
}

#[test]
fn test_content_truncated_at_limit() {
    let table = Arc::new(MockProcessTable::new());
    let big = alloc::vec![b'x'; MAX_STATUS_SIZE + 100];
    table.insert("5", &big);
    let source = StatusSource::new(table.clone());

    assert_eq!(source.size("5"), MAX_STATUS_SIZE);
}

#[test]
fn test_custom_pool_limit() {
    let table = create_test_table();
    let source = StatusSource::with_pool(table.clone(), SnapshotPool::new(4, 1));

    assert_eq!(source.snapshot("1").as_bytes(), b"Name");
}

#[test]
fn test_buffers_returned_after_snapshot() {
    let table = create_test_table();
    let source = StatusSource::new(table.clone());

    for _ in 0..3 {
        let _ = source.size("1");
    }
    assert_eq!(source.pool().idle_count(), 1);
}

#[test]
fn test_every_snapshot_rereads_host() {
    let table = create_test_table();
    let source = StatusSource::new(table.clone());

    let before = table.status_reads();
    let _ = source.size("1");
    let _ = source.size("1");
    assert_eq!(table.status_reads(), before + 2);
}
