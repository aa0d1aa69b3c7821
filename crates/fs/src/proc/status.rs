//! 进程状态内容源
//!
//! 把宿主进程表（[`ProcessSource`]）与快照缓冲池组合起来，为驱动提供
//! "给定条目名，取一份状态快照" 的能力。宿主侧的任何失败都在这里被吸收：
//! 驱动只会看到长度为零的快照，不会看到错误。

use alloc::sync::Arc;

use log::{debug, warn};
use vfs::{FsError, strip_root};

use crate::config::{MAX_IDLE_SNAPSHOTS, MAX_STATUS_SIZE};
use crate::ops::ProcessSource;
use crate::proc::{Snapshot, SnapshotPool};

/// 状态快照提供者
pub struct StatusSource {
    host: Arc<dyn ProcessSource>,
    pool: SnapshotPool,
}

impl StatusSource {
    /// 使用默认快照上限创建
    pub fn new(host: Arc<dyn ProcessSource>) -> Self {
        Self::with_pool(host, SnapshotPool::new(MAX_STATUS_SIZE, MAX_IDLE_SNAPSHOTS))
    }

    /// 使用指定缓冲池创建
    pub fn with_pool(host: Arc<dyn ProcessSource>, pool: SnapshotPool) -> Self {
        Self { host, pool }
    }

    /// 宿主进程表
    pub fn host(&self) -> &dyn ProcessSource {
        self.host.as_ref()
    }

    /// 缓冲池
    pub fn pool(&self) -> &SnapshotPool {
        &self.pool
    }

    /// 取 `name` 对应进程当前的状态快照
    ///
    /// `name` 可以带一个前导分隔符。超过缓冲区大小的内容不会被读取。
    /// 状态资源不可用时返回空快照。
    pub fn snapshot(&self, name: &str) -> Snapshot<'_> {
        let name = strip_root(name);
        let mut buf = self.pool.acquire();
        match self.host.read_status(name, &mut buf) {
            Ok(0) => {
                warn!("pidfs: status of {name} opened but no content could be read");
                Snapshot::empty(buf)
            }
            Ok(len) => Snapshot::new(buf, len),
            Err(FsError::Unavailable) => {
                debug!("pidfs: status of {name} unavailable");
                Snapshot::empty(buf)
            }
            Err(err) => {
                warn!("pidfs: failed to read status of {name}: {err}");
                Snapshot::empty(buf)
            }
        }
    }

    /// 当前状态内容的字节数
    pub fn size(&self, name: &str) -> usize {
        self.snapshot(name).len()
    }
}
