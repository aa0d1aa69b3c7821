//! 进程表的 Mock 实现
//!
//! 注意：这里不直接依赖 `fs` crate（避免循环依赖）。
//! `fs` crate 在 `cfg(test)` 下为这些类型实现其 trait（`ProcessSource`）。

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use sync::SpinLock;

struct Entry {
    name: String,
    /// `None` 表示条目可见但状态资源无法打开
    status: Option<Vec<u8>>,
}

struct Table {
    entries: Vec<Entry>,
    listing_fails: bool,
}

/// Mock 的宿主进程表
///
/// 条目按插入顺序列出，可在测试过程中增删以模拟进程的创建与退出。
pub struct MockProcessTable {
    table: SpinLock<Table>,
    status_reads: AtomicUsize,
}

impl MockProcessTable {
    /// 创建空表
    pub const fn new() -> Self {
        Self {
            table: SpinLock::new(Table {
                entries: Vec::new(),
                listing_fails: false,
            }),
            status_reads: AtomicUsize::new(0),
        }
    }

    /// 构造器风格的 [`Self::insert`]
    pub fn with_process(self, pid: &str, status: &str) -> Self {
        self.insert(pid, status.as_bytes());
        self
    }

    /// 构造器风格的 [`Self::add_system_entry`]
    pub fn with_system_entry(self, name: &str) -> Self {
        self.add_system_entry(name);
        self
    }

    /// 插入或替换一个进程的状态内容
    pub fn insert(&self, pid: &str, status: &[u8]) {
        let mut table = self.table.lock();
        match table.entries.iter_mut().find(|e| e.name == pid) {
            Some(entry) => entry.status = Some(status.to_vec()),
            None => table.entries.push(Entry {
                name: pid.to_string(),
                status: Some(status.to_vec()),
            }),
        }
    }

    /// 添加一个非进程条目（例如 `self`、`meminfo`），其状态资源不可读
    pub fn add_system_entry(&self, name: &str) {
        self.table.lock().entries.push(Entry {
            name: name.to_string(),
            status: None,
        });
    }

    /// 模拟进程退出
    pub fn remove(&self, pid: &str) {
        self.table.lock().entries.retain(|e| e.name != pid);
    }

    /// 保留条目但让状态资源无法打开（例如僵尸进程或权限问题）
    pub fn make_unreadable(&self, pid: &str) {
        if let Some(entry) = self.table.lock().entries.iter_mut().find(|e| e.name == pid) {
            entry.status = None;
        }
    }

    /// 让后续的目录枚举失败
    pub fn set_listing_fails(&self, fails: bool) {
        self.table.lock().listing_fails = fails;
    }

    /// 枚举失败开关
    pub fn listing_fails(&self) -> bool {
        self.table.lock().listing_fails
    }

    /// 当前可见的条目名（按插入顺序）
    pub fn entries(&self) -> Vec<String> {
        self.table
            .lock()
            .entries
            .iter()
            .map(|e| e.name.clone())
            .collect()
    }

    /// 读取状态内容，每次调用都计数
    pub fn status(&self, pid: &str) -> Option<Vec<u8>> {
        self.status_reads.fetch_add(1, Ordering::Relaxed);
        self.table
            .lock()
            .entries
            .iter()
            .find(|e| e.name == pid)
            .and_then(|e| e.status.clone())
    }

    /// 到目前为止状态内容被读取的次数
    pub fn status_reads(&self) -> usize {
        self.status_reads.load(Ordering::Relaxed)
    }
}

impl Default for MockProcessTable {
    fn default() -> Self {
        Self::new()
    }
}
