//! pidfs - 进程状态文件系统
//!
//! 在用户指定的目录上挂载一个只读文件系统：列出目录得到当前存活的进程号，
//! 读取其中一个条目得到该进程的状态报告（`/proc/[pid]/status` 的快照）。
//!
//! ```text
//! mkdir myproc
//! pidfs myproc/
//! ls myproc            # 每个进程一个文件
//! cat myproc/4321      # 进程 4321 的状态
//! fusermount -u myproc # 卸载
//! ```

mod config;
mod fs;
mod fuse;
mod log;

use anyhow::{Result, bail};
use clap::Parser;

use crate::config::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    log::init(config.log_level.into());

    if !config.mountpoint.is_dir() {
        bail!(
            "mount point {} is not a directory",
            config.mountpoint.display()
        );
    }

    let procfs = fs::init_procfs(&config.proc_root);
    fuse::mount(procfs, &config)
}
