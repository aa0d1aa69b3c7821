//! # 文件系统模块 (FS)
//!
//! 本模块 re-export fs crate 的内容，并提供基于宿主 `/proc` 的驱动构造函数。

mod ops_impl;

// Re-export fs crate (使用 :: 前缀引用外部 crate，避免与本模块名冲突)
pub use ::fs::*;

pub use ops_impl::HostProcessTable;

use std::path::Path;
use std::sync::Arc;

use log::info;

/// 创建读取 `proc_root` 的驱动
pub fn init_procfs(proc_root: &Path) -> Arc<ProcFS> {
    let table = HostProcessTable::new(proc_root);
    info!("pidfs: serving process status from {}", table.root().display());
    ProcFS::new(Arc::new(table))
}
