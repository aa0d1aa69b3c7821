//! 虚拟文件系统公共词汇
//!
//! 此 crate 提供 pidfs 驱动层与挂载前端共享的类型，包括：
//!
//! - [`FsError`] - 与 POSIX errno 对应的错误码
//! - [`InodeType`] / [`FileMode`] / [`FileAttr`] - 属性查询的返回值
//! - [`DirEntry`] - 目录枚举的返回值
//! - [`OpenFlags`] - 打开文件时请求的访问模式
//! - [`FileSystem`] trait - 以路径为参数的只读文件系统接口
//! - 路径辅助函数

#![no_std]

extern crate alloc;

pub mod error;

mod fcntl;
mod file_system;
mod inode;
mod path;

// Re-export error
pub use error::FsError;

// Re-export fcntl
pub use fcntl::{AccessMode, OpenFlags};

// Re-export file_system
pub use file_system::FileSystem;

// Re-export inode
pub use inode::{DirEntry, FileAttr, FileMode, InodeType};

// Re-export path
pub use path::{ROOT_PATH, SEPARATOR, entry_path, is_root, strip_root};
