//! fuser 分发层适配
//!
//! 把内核发来的以 inode 编号为参数的请求翻译为以路径为参数的
//! [`FileSystem`] 调用，并把结果或错误码回复给内核。

use std::ffi::OsStr;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

use fuser::consts::FOPEN_DIRECT_IO;
use fuser::{
    FileAttr as FuseAttr, FileType, Filesystem, ReplyAttr, ReplyData, ReplyDirectory, ReplyEntry,
    ReplyOpen, Request,
};
use log::trace;
use vfs::{
    DirEntry, FileAttr, FileSystem, FsError, InodeType, OpenFlags, ROOT_PATH, entry_path, strip_root,
};

use super::inode_table::{InodeTable, ROOT_INO};
use crate::fs::config::{MAX_PATH_LEN, MAX_STATUS_SIZE};

/// 内容随时变化，内核不得缓存属性与目录项
const TTL: Duration = Duration::ZERO;

const BLOCK_SIZE: u32 = 512;

/// 挂载到 fuser 的文件系统
pub struct FuseAdapter {
    fs: Arc<dyn FileSystem>,
    inodes: InodeTable,
}

impl FuseAdapter {
    /// 包装一个以路径为参数的文件系统
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            inodes: InodeTable::new(),
        }
    }

    /// inode 编号对应的路径
    fn path_of(&self, ino: u64) -> Option<String> {
        if ino == ROOT_INO {
            return Some(ROOT_PATH.to_string());
        }
        self.inodes.name_of(ino).map(|name| entry_path(&name))
    }
}

/// 转换为 fuser 回复使用的正数错误码
fn errno(err: FsError) -> i32 {
    -(err.to_errno() as i32)
}

/// 校验 lookup 请求并构造条目路径
///
/// 只有根目录下有条目；加上前导分隔符与结尾 NUL 后不能超过路径上限。
fn lookup_path(parent: u64, name: &OsStr) -> Result<String, FsError> {
    if parent != ROOT_INO {
        return Err(FsError::NotDirectory);
    }
    let name = name.to_str().ok_or(FsError::NotFound)?;
    if name.len() + 2 > MAX_PATH_LEN {
        return Err(FsError::NameTooLong);
    }
    Ok(entry_path(name))
}

/// 从 readdir 的 `offset` 处继续枚举，同时给出每个条目之后的 offset
fn entries_after(entries: &[DirEntry], offset: i64) -> impl Iterator<Item = (i64, &DirEntry)> {
    let skip = usize::try_from(offset).unwrap_or(0);
    entries
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(index, entry)| ((index + 1) as i64, entry))
}

fn file_type(inode_type: InodeType) -> FileType {
    match inode_type {
        InodeType::File => FileType::RegularFile,
        InodeType::Directory => FileType::Directory,
    }
}

fn fuse_attr(ino: u64, attr: &FileAttr) -> FuseAttr {
    FuseAttr {
        ino,
        size: attr.size,
        blocks: 0,
        atime: UNIX_EPOCH,
        mtime: UNIX_EPOCH,
        ctime: UNIX_EPOCH,
        crtime: UNIX_EPOCH,
        kind: file_type(attr.inode_type),
        perm: attr.mode.permissions(),
        nlink: attr.nlinks,
        uid: 0,
        gid: 0,
        rdev: 0,
        blksize: BLOCK_SIZE,
        flags: 0,
    }
}

impl Filesystem for FuseAdapter {
    fn lookup(&mut self, _req: &Request<'_>, parent: u64, name: &OsStr, reply: ReplyEntry) {
        let path = match lookup_path(parent, name) {
            Ok(path) => path,
            Err(err) => {
                reply.error(errno(err));
                return;
            }
        };

        match self.fs.getattr(&path) {
            Ok(attr) => {
                let ino = self.inodes.lookup(strip_root(&path));
                reply.entry(&TTL, &fuse_attr(ino, &attr), 0);
            }
            Err(err) => reply.error(errno(err)),
        }
    }

    fn forget(&mut self, _req: &Request<'_>, ino: u64, nlookup: u64) {
        self.inodes.forget(ino, nlookup);
    }

    fn getattr(&mut self, _req: &Request<'_>, ino: u64, reply: ReplyAttr) {
        let Some(path) = self.path_of(ino) else {
            reply.error(errno(FsError::NotFound));
            return;
        };
        match self.fs.getattr(&path) {
            Ok(attr) => reply.attr(&TTL, &fuse_attr(ino, &attr)),
            Err(err) => reply.error(errno(err)),
        }
    }

    fn open(&mut self, _req: &Request<'_>, ino: u64, flags: i32, reply: ReplyOpen) {
        let Some(path) = self.path_of(ino) else {
            reply.error(errno(FsError::NotFound));
            return;
        };
        match self.fs.open(&path, OpenFlags::from_raw(flags)) {
            // 大小随时变化，绕过页缓存，避免内核按 getattr 的大小截断读取
            Ok(()) => reply.opened(0, FOPEN_DIRECT_IO),
            Err(err) => reply.error(errno(err)),
        }
    }

    fn read(
        &mut self,
        _req: &Request<'_>,
        ino: u64,
        _fh: u64,
        offset: i64,
        size: u32,
        _flags: i32,
        _lock_owner: Option<u64>,
        reply: ReplyData,
    ) {
        let Some(path) = self.path_of(ino) else {
            reply.data(&[]);
            return;
        };
        let Ok(offset) = u64::try_from(offset) else {
            reply.error(errno(FsError::InvalidArgument));
            return;
        };

        // 内容不会超过快照上限，更大的请求无需分配
        let mut buf = vec![0u8; (size as usize).min(MAX_STATUS_SIZE)];
        let len = self.fs.read(&path, &mut buf, offset);
        trace!("pidfs: read {path} offset={offset} size={size} -> {len}");
        reply.data(&buf[..len]);
    }

    fn readdir(
        &mut self,
        _req: &Request<'_>,
        ino: u64,
        _fh: u64,
        offset: i64,
        mut reply: ReplyDirectory,
    ) {
        if ino != ROOT_INO {
            reply.error(errno(FsError::NotDirectory));
            return;
        }
        let entries = match self.fs.readdir(ROOT_PATH) {
            Ok(entries) => entries,
            Err(err) => {
                reply.error(errno(err));
                return;
            }
        };

        for (next, entry) in entries_after(&entries, offset) {
            let entry_ino = match entry.name.as_str() {
                "." | ".." => ROOT_INO,
                name => self.inodes.listing_ino(name),
            };
            if reply.add(entry_ino, next, file_type(entry.inode_type), &entry.name) {
                break;
            }
        }
        reply.ok();
    }
}
