//! ProcFS 驱动实现

use alloc::sync::Arc;
use alloc::vec::Vec;

use log::{debug, trace};
use vfs::{DirEntry, FileAttr, FileSystem, FsError, InodeType, OpenFlags, is_root, strip_root};

use crate::config::{ENTRY_FILE_MODE, ENTRY_FILE_NLINKS, ROOT_DIR_MODE, ROOT_DIR_NLINKS};
use crate::ops::ProcessSource;
use crate::proc::{StatusSource, is_valid_entry_name};

/// ProcFS 文件系统对象
///
/// 不持有任何按进程的状态：每次调用都从宿主进程表重新推导结果，
/// 因此可以被多个分发线程同时调用。
pub struct ProcFS {
    status: StatusSource,
}

impl ProcFS {
    /// 创建新的 ProcFS 实例
    pub fn new(host: Arc<dyn ProcessSource>) -> Arc<Self> {
        Arc::new(Self {
            status: StatusSource::new(host),
        })
    }

    fn root_attr() -> FileAttr {
        FileAttr {
            inode_type: InodeType::Directory,
            mode: ROOT_DIR_MODE,
            size: 0,
            nlinks: ROOT_DIR_NLINKS,
        }
    }

    fn entry_attr(size: usize) -> FileAttr {
        FileAttr {
            inode_type: InodeType::File,
            mode: ENTRY_FILE_MODE,
            size: size as u64,
            nlinks: ENTRY_FILE_NLINKS,
        }
    }
}

impl FileSystem for ProcFS {
    /// 文件大小通过一次完整的内容读取得到，保证反映查询时刻的内容长度
    fn getattr(&self, path: &str) -> Result<FileAttr, FsError> {
        if is_root(path) {
            return Ok(Self::root_attr());
        }
        if !is_valid_entry_name(path) {
            return Err(FsError::NotFound);
        }

        let size = self.status.size(path);
        trace!("pidfs: getattr {path} -> {size} bytes");
        Ok(Self::entry_attr(size))
    }

    fn readdir(&self, path: &str) -> Result<Vec<DirEntry>, FsError> {
        if !is_root(path) {
            return Err(FsError::NotFound);
        }

        let names = self.status.host().list_entries()?;

        let mut entries = Vec::with_capacity(names.len() + 2);
        entries.push(DirEntry::directory("."));
        entries.push(DirEntry::directory(".."));
        entries.extend(
            names
                .iter()
                .filter(|name| is_valid_entry_name(name))
                .map(|name| DirEntry::file(name)),
        );

        trace!("pidfs: readdir {path} -> {} entries", entries.len());
        Ok(entries)
    }

    fn open(&self, path: &str, flags: OpenFlags) -> Result<(), FsError> {
        if !is_valid_entry_name(strip_root(path)) {
            return Err(FsError::NotFound);
        }
        if !flags.is_read_only() {
            debug!("pidfs: rejecting open of {path} with {:?}", flags.access_mode());
            return Err(FsError::PermissionDenied);
        }
        Ok(())
    }

    /// 读取时重新取快照，不依赖打开或属性查询时看到的内容
    ///
    /// 两次调用之间进程内容可能变化或进程已退出，此时读取结果与属性查询给出的
    /// 大小不一致；进程已退出时读到 0 字节。
    fn read(&self, path: &str, buf: &mut [u8], offset: u64) -> usize {
        if !is_valid_entry_name(path) {
            return 0;
        }

        let snapshot = self.status.snapshot(path);
        if snapshot.is_empty() {
            debug!("pidfs: read {path}: no status content, process may have exited");
        }
        snapshot.read_at(offset, buf)
    }
}
