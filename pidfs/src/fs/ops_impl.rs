//! ProcessSource trait 实现
//!
//! 此模块基于宿主的 `/proc` 目录实现 fs crate 的 [`ProcessSource`] trait。

use std::fs::{self as host_fs, File};
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};

use ::fs::ProcessSource;
use log::{debug, warn};
use vfs::{FsError, SEPARATOR};

/// 每个进程目录下的状态文件名
const STATUS_FILE: &str = "status";

/// 宿主进程表
///
/// 进程 `name` 的状态内容取自 `<root>/<name>/status`。
pub struct HostProcessTable {
    root: PathBuf,
}

impl HostProcessTable {
    /// 以 `root` 为进程表目录创建
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 进程表目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 状态文件路径
    ///
    /// 只接受单个路径组件，其余名称没有对应的状态文件。
    fn status_path(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains(SEPARATOR) {
            return None;
        }
        Some(self.root.join(name).join(STATUS_FILE))
    }
}

impl ProcessSource for HostProcessTable {
    fn read_status(&self, name: &str, buf: &mut [u8]) -> Result<usize, FsError> {
        let Some(path) = self.status_path(name) else {
            return Err(FsError::Unavailable);
        };

        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                debug!("pidfs: cannot open {}: {err}", path.display());
                return Err(FsError::Unavailable);
            }
        };

        let mut filled = 0;
        while filled < buf.len() {
            match file.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                // 进程在读取过程中退出时 /proc 返回 ESRCH，保留已读到的部分
                Err(err) if filled > 0 => {
                    debug!("pidfs: short read of {}: {err}", path.display());
                    break;
                }
                Err(err) => return Err(io_error_to_fs(&err)),
            }
        }
        Ok(filled)
    }

    fn list_entries(&self) -> Result<Vec<String>, FsError> {
        let dir = host_fs::read_dir(&self.root).map_err(|err| {
            warn!("pidfs: cannot list {}: {err}", self.root.display());
            io_error_to_fs(&err)
        })?;

        // 枚举过程中消失的条目直接跳过
        Ok(dir
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect())
    }
}

fn io_error_to_fs(err: &io::Error) -> FsError {
    match err.kind() {
        ErrorKind::NotFound => FsError::NotFound,
        ErrorKind::PermissionDenied => FsError::PermissionDenied,
        _ => FsError::IoError,
    }
}
