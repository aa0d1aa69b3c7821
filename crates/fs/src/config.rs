//! 固定常量
//!
//! 快照上限与路径长度上限需要与既有挂载保持兼容，不可随意修改。

use vfs::FileMode;

/// 单个状态快照的最大字节数，超出部分直接丢弃
pub const MAX_STATUS_SIZE: usize = 64 * 1024;

/// 路径名最大长度（含结尾 NUL）
pub const MAX_PATH_LEN: usize = 256;

/// 缓冲池中保留的空闲快照缓冲区数量上限
pub const MAX_IDLE_SNAPSHOTS: usize = 8;

/// 根目录类型与权限（0o755）
pub const ROOT_DIR_MODE: FileMode = FileMode::S_IFDIR
    .union(FileMode::S_IRUSR)
    .union(FileMode::S_IWUSR)
    .union(FileMode::S_IXUSR)
    .union(FileMode::S_IRGRP)
    .union(FileMode::S_IXGRP)
    .union(FileMode::S_IROTH)
    .union(FileMode::S_IXOTH);

/// 进程条目类型与权限（0o444，所有人只读）
pub const ENTRY_FILE_MODE: FileMode = FileMode::S_IFREG
    .union(FileMode::S_IRUSR)
    .union(FileMode::S_IRGRP)
    .union(FileMode::S_IROTH);

/// 根目录硬链接数
pub const ROOT_DIR_NLINKS: u32 = 2;

/// 进程条目硬链接数
pub const ENTRY_FILE_NLINKS: u32 = 1;
