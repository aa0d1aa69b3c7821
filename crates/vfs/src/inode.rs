//! 属性与目录项
//!
//! pidfs 不维护 inode 对象；这里只保留属性查询与目录枚举需要的值类型。

use alloc::string::String;

/// 文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InodeType {
    /// 普通文件
    File,
    /// 目录
    Directory,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// 文件权限和类型（与 POSIX 兼容）
    pub struct FileMode: u32 {
        // 文件类型
        /// 普通文件
        const S_IFREG  = 0o100000;
        /// 目录
        const S_IFDIR  = 0o040000;

        // 用户权限
        /// 用户读
        const S_IRUSR  = 0o400;
        /// 用户写
        const S_IWUSR  = 0o200;
        /// 用户执行
        const S_IXUSR  = 0o100;

        // 组权限
        /// 组读
        const S_IRGRP  = 0o040;
        /// 组写
        const S_IWGRP  = 0o020;
        /// 组执行
        const S_IXGRP  = 0o010;

        // 其他用户权限
        /// 其他读
        const S_IROTH  = 0o004;
        /// 其他写
        const S_IWOTH  = 0o002;
        /// 其他执行
        const S_IXOTH  = 0o001;
    }
}

impl FileMode {
    /// 权限位（去掉类型位）
    pub fn permissions(&self) -> u16 {
        (self.bits() & 0o7777) as u16
    }

    /// 检查是否有任何写权限
    pub fn can_write(&self) -> bool {
        self.intersects(FileMode::S_IWUSR | FileMode::S_IWGRP | FileMode::S_IWOTH)
    }
}

/// 轻量级目录项（readdir 返回）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// 文件名
    pub name: String,
    /// 文件类型
    pub inode_type: InodeType,
}

impl DirEntry {
    /// 目录项
    pub fn directory(name: &str) -> Self {
        Self {
            name: String::from(name),
            inode_type: InodeType::Directory,
        }
    }

    /// 普通文件项
    pub fn file(name: &str) -> Self {
        Self {
            name: String::from(name),
            inode_type: InodeType::File,
        }
    }
}

/// 属性查询结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileAttr {
    /// 文件类型
    pub inode_type: InodeType,
    /// 类型位与权限位
    pub mode: FileMode,
    /// 文件大小（字节）
    pub size: u64,
    /// 硬链接数
    pub nlinks: u32,
}
