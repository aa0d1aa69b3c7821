//! 快照缓冲池
//!
//! 每个进行中的调用独占一个固定大小的缓冲区，调用结束时归还到池中复用。
//! 缓冲区归还后其内容视为已清空：新的 [`Snapshot`] 只暴露本次写入的长度。

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use sync::SpinLock;

/// 有界的快照缓冲池
pub struct SnapshotPool {
    idle: SpinLock<Vec<Box<[u8]>>>,
    buf_size: usize,
    max_idle: usize,
}

impl SnapshotPool {
    /// 创建缓冲池
    ///
    /// `buf_size` 为每个缓冲区的大小，`max_idle` 为最多保留的空闲缓冲区数量。
    pub const fn new(buf_size: usize, max_idle: usize) -> Self {
        Self {
            idle: SpinLock::new(Vec::new()),
            buf_size,
            max_idle,
        }
    }

    /// 取出一个缓冲区，池为空时新分配
    pub fn acquire(&self) -> SnapshotBuf<'_> {
        let buf = self.idle.lock().pop();
        let buf = buf.unwrap_or_else(|| vec![0u8; self.buf_size].into_boxed_slice());
        SnapshotBuf {
            pool: self,
            buf: Some(buf),
        }
    }

    /// 当前空闲缓冲区数量
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    fn release(&self, buf: Box<[u8]>) {
        let mut idle = self.idle.lock();
        if idle.len() < self.max_idle {
            idle.push(buf);
        }
        // 超出上限的缓冲区随 buf 一起释放
    }
}

/// 从池中借出的缓冲区，离开作用域时自动归还
pub struct SnapshotBuf<'a> {
    pool: &'a SnapshotPool,
    buf: Option<Box<[u8]>>,
}

impl Deref for SnapshotBuf<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.buf.as_deref().unwrap_or(&[])
    }
}

impl DerefMut for SnapshotBuf<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.buf.as_deref_mut().unwrap_or(&mut [])
    }
}

impl Drop for SnapshotBuf<'_> {
    fn drop(&mut self) {
        if let Some(buf) = self.buf.take() {
            self.pool.release(buf);
        }
    }
}

/// 某一时刻的进程状态快照
///
/// 生命周期恰好是一次驱动调用。
pub struct Snapshot<'a> {
    buf: SnapshotBuf<'a>,
    len: usize,
}

impl<'a> Snapshot<'a> {
    /// 以缓冲区前 `len` 字节构造快照，`len` 超出缓冲区时截断
    pub fn new(buf: SnapshotBuf<'a>, len: usize) -> Self {
        let len = len.min(buf.len());
        Self { buf, len }
    }

    /// 空快照（状态资源不可用）
    pub fn empty(buf: SnapshotBuf<'a>) -> Self {
        Self { buf, len: 0 }
    }

    /// 快照字节数
    pub fn len(&self) -> usize {
        self.len
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 快照内容
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// 从 `offset` 开始复制到 `out`，返回复制的字节数
    ///
    /// `offset >= len` 时返回 0；否则复制 `min(out.len(), len - offset)` 字节。
    pub fn read_at(&self, offset: u64, out: &mut [u8]) -> usize {
        let Ok(offset) = usize::try_from(offset) else {
            return 0;
        };
        if offset >= self.len {
            return 0;
        }
        let count = out.len().min(self.len - offset);
        out[..count].copy_from_slice(&self.buf[offset..offset + count]);
        count
    }
}
