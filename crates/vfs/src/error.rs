//! VFS 错误类型
//!
//! 定义了与 POSIX 兼容的文件系统错误码，可通过 [`FsError::to_errno()`] 转换为系统调用错误码。

/// VFS 错误类型
///
/// 各错误码对应标准 POSIX errno 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FsError {
    // 文件/目录相关
    /// 文件不存在 (-ENOENT)
    #[error("no such file or directory")]
    NotFound,
    /// 不是目录 (-ENOTDIR)
    #[error("not a directory")]
    NotDirectory,

    // 权限相关
    /// 权限被拒绝 (-EACCES)
    #[error("permission denied")]
    PermissionDenied,

    // 参数相关
    /// 无效参数 (-EINVAL)
    #[error("invalid argument")]
    InvalidArgument,
    /// 文件名过长 (-ENAMETOOLONG)
    #[error("file name too long")]
    NameTooLong,

    // 文件系统相关
    /// I/O 错误 (-EIO)
    #[error("input/output error")]
    IoError,
    /// 内容源暂不可用（进程已退出或宿主读取失败）
    ///
    /// 仅在驱动内部使用，对外表现为长度为零的内容；若确需上报则映射为 -EIO。
    #[error("status resource unavailable")]
    Unavailable,
}

impl FsError {
    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        match self {
            FsError::NotFound => -2,
            FsError::IoError | FsError::Unavailable => -5,
            FsError::PermissionDenied => -13,
            FsError::NotDirectory => -20,
            FsError::InvalidArgument => -22,
            FsError::NameTooLong => -36,
        }
    }
}
