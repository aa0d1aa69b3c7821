//! 文件系统抽象
//!
//! 以路径为参数的只读文件系统接口。挂载前端（分发层）对每个文件系统调用
//! 调用一次对应方法，方法同步完成并返回普通值或错误码。

use alloc::vec::Vec;

use crate::{DirEntry, FileAttr, FsError, OpenFlags};

/// 文件系统 trait
///
/// 实现必须可以被多个分发线程同时调用。
pub trait FileSystem: Send + Sync {
    /// 查询路径属性
    fn getattr(&self, path: &str) -> Result<FileAttr, FsError>;

    /// 枚举目录内容
    fn readdir(&self, path: &str) -> Result<Vec<DirEntry>, FsError>;

    /// 以给定标志打开文件
    ///
    /// 不返回句柄：后续读取不依赖打开时的任何状态。
    fn open(&self, path: &str, flags: OpenFlags) -> Result<(), FsError>;

    /// 从 `offset` 开始读取，最多填满 `buf`，返回实际字节数
    ///
    /// 越界偏移返回 0 而不是错误。
    fn read(&self, path: &str, buf: &mut [u8], offset: u64) -> usize;
}
