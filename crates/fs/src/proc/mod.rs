//! ProcFS - 进程状态伪文件系统
//!
//! 根目录下每个宿主进程对应一个只读文件，内容为 `/proc/[pid]/status` 的快照。
//! 快照不缓存：每次属性查询与每次读取都会重新向宿主取内容。

pub mod name;
pub mod proc;
pub mod snapshot;
pub mod status;

#[cfg(test)]
mod tests;

pub use name::is_valid_entry_name;
pub use proc::ProcFS;
pub use snapshot::{Snapshot, SnapshotBuf, SnapshotPool};
pub use status::StatusSource;
