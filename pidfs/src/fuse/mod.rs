//! FUSE 挂载
//!
//! 负责构造挂载选项、启动 fuser 会话，并在收到 SIGINT/SIGTERM 时卸载。

mod adapter;
mod inode_table;

pub use adapter::FuseAdapter;

use std::sync::Arc;

use anyhow::{Context, Result};
use fuser::{MountOption, Session};
use log::{error, info};
use vfs::FileSystem;

use crate::config::Config;

/// 根据配置生成挂载选项（始终只读）
pub fn mount_options(config: &Config) -> Vec<MountOption> {
    let mut options = vec![
        MountOption::RO,
        MountOption::FSName(config.fs_name.clone()),
        MountOption::Subtype("pidfs".to_string()),
        MountOption::NoExec,
        MountOption::NoSuid,
        MountOption::NoDev,
    ];
    if config.allow_other {
        options.push(MountOption::AllowOther);
    }
    if config.auto_unmount {
        options.push(MountOption::AutoUnmount);
    }
    options
}

/// 挂载并阻塞，直到文件系统被卸载
///
/// 外部卸载（`fusermount -u`）与 Ctrl-C / SIGTERM 都会让本函数返回。
pub fn mount(fs: Arc<dyn FileSystem>, config: &Config) -> Result<()> {
    let options = mount_options(config);
    let mut session = Session::new(FuseAdapter::new(fs), &config.mountpoint, &options)
        .with_context(|| format!("failed to mount at {}", config.mountpoint.display()))?;

    let mut unmounter = session.unmount_callable();
    ctrlc::set_handler(move || {
        info!("pidfs: signal received, unmounting");
        if let Err(err) = unmounter.unmount() {
            error!("pidfs: unmount failed: {err}");
        }
    })
    .context("failed to install signal handler")?;

    info!("pidfs: mounted at {}", config.mountpoint.display());
    session.run().context("filesystem session failed")?;
    info!("pidfs: unmounted {}", config.mountpoint.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn options_for(args: &[&str]) -> Vec<MountOption> {
        let config = Config::try_parse_from(args).unwrap();
        mount_options(&config)
    }

    #[test]
    fn test_mount_is_read_only() {
        let options = options_for(&["pidfs", "/mnt"]);
        assert!(options.contains(&MountOption::RO));
        assert!(options.contains(&MountOption::FSName("pidfs".to_string())));
        assert!(!options.contains(&MountOption::AllowOther));
        assert!(!options.contains(&MountOption::AutoUnmount));
    }

    #[test]
    fn test_optional_mount_flags() {
        let options = options_for(&[
            "pidfs",
            "--allow-other",
            "--auto-unmount",
            "--fs-name",
            "procs",
            "/mnt",
        ]);
        assert!(options.contains(&MountOption::AllowOther));
        assert!(options.contains(&MountOption::AutoUnmount));
        assert!(options.contains(&MountOption::FSName("procs".to_string())));
    }
}
