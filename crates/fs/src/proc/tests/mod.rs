// Unit tests for the proc driver.
//
// The host process table is replaced by `test_support::mock::MockProcessTable`, which
// lets each test script process creation, exit and unreadable status resources.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use test_support::mock::MockProcessTable;
use vfs::{FileSystem, FsError, OpenFlags};

use crate::ops::ProcessSource;
use crate::proc::ProcFS;

mod name;
mod status;

impl ProcessSource for MockProcessTable {
    fn read_status(&self, name: &str, buf: &mut [u8]) -> Result<usize, FsError> {
        let content = self.status(name).ok_or(FsError::Unavailable)?;
        let len = content.len().min(buf.len());
        buf[..len].copy_from_slice(&content[..len]);
        Ok(len)
    }

    fn list_entries(&self) -> Result<Vec<String>, FsError> {
        if self.listing_fails() {
            return Err(FsError::IoError);
        }
        Ok(self.entries())
    }
}

const INIT_STATUS: &str = "Name:\tinit\nState:\tS (sleeping)\nTgid:\t1\nPid:\t1\nPPid:\t0\n";
const SHELL_STATUS: &str = "Name:\tbash\nState:\tS (sleeping)\nTgid:\t4321\nPid:\t4321\nPPid:\t1\n";

/// 包含两个进程和几个非进程条目的进程表
fn create_test_table() -> Arc<MockProcessTable> {
    Arc::new(
        MockProcessTable::new()
            .with_process("1", INIT_STATUS)
            .with_system_entry("self")
            .with_process("4321", SHELL_STATUS)
            .with_system_entry("meminfo")
            .with_system_entry("sys"),
    )
}

fn create_test_procfs(table: &Arc<MockProcessTable>) -> Arc<ProcFS> {
    let host: Arc<dyn ProcessSource> = table.clone();
    ProcFS::new(host)
}

/// 读取整个文件内容
fn read_all(fs: &ProcFS, path: &str) -> Vec<u8> {
    let mut buf = alloc::vec![0u8; crate::config::MAX_STATUS_SIZE];
    let len = fs.read(path, &mut buf, 0);
    buf.truncate(len);
    buf
}

fn read_only() -> OpenFlags {
    OpenFlags::O_RDONLY
}
