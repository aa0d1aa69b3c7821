//! 运行时配置
//!
//! 全部来自命令行；固定常量见 `fs::config`。

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// 默认的宿主进程表目录
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// 默认的文件系统名称（出现在 `/proc/mounts` 中）
pub const DEFAULT_FS_NAME: &str = "pidfs";

/// 命令行配置
#[derive(Debug, Clone, Parser)]
#[command(name = "pidfs", version, about, long_about = None)]
pub struct Config {
    /// 挂载点目录
    #[arg(value_name = "MOUNTPOINT", help = "Directory to mount the filesystem on")]
    pub mountpoint: PathBuf,

    /// 宿主进程表目录
    #[arg(
        long,
        value_name = "DIR",
        default_value = DEFAULT_PROC_ROOT,
        help = "Host process table to read status files from"
    )]
    pub proc_root: PathBuf,

    /// 文件系统名称
    #[arg(
        long,
        value_name = "NAME",
        default_value = DEFAULT_FS_NAME,
        help = "Filesystem name shown in the mount table"
    )]
    pub fs_name: String,

    /// 允许其他用户访问挂载点
    #[arg(long, help = "Allow other users to access the mount")]
    pub allow_other: bool,

    /// 进程退出时自动卸载
    #[arg(long, help = "Unmount automatically when pidfs exits")]
    pub auto_unmount: bool,

    /// 日志级别，`RUST_LOG` 优先
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = LogLevel::Warn,
        help = "Log level (RUST_LOG takes precedence)"
    )]
    pub log_level: LogLevel,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// 关闭
    Off,
    /// 错误
    Error,
    /// 警告
    Warn,
    /// 信息
    Info,
    /// 调试
    Debug,
    /// 跟踪
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
