//! 同步原语
//!
//! 向其它模块提供基本的自旋锁。
//!
//! 锁只用于保护极短的临界区（缓冲池的取还、测试桩的表更新），
//! 因此自旋而不是挂起线程。

#![no_std]

mod raw_spin_lock;
mod spin_lock;

pub use raw_spin_lock::*;
pub use spin_lock::*;
