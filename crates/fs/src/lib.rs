//! # 进程状态文件系统 (FS)
//!
//! 本 crate 实现 pidfs 的驱动核心：挂载点根目录下为每个宿主进程提供一个
//! 只读文件，文件名为进程号，内容为该进程状态报告的即时快照。
//!
//! - [`proc`]：名称校验、状态内容源、快照缓冲池与 [`ProcFS`] 驱动
//! - [`ops`]：驱动对宿主进程表的依赖接口 [`ProcessSource`]
//! - [`config`]：固定常量

#![no_std]
#![allow(clippy::module_inception)]
#![doc = "文件系统实现"]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod config;
pub mod ops;
pub mod proc;

pub use ops::ProcessSource;
pub use proc::{ProcFS, Snapshot, SnapshotPool, StatusSource, is_valid_entry_name};
