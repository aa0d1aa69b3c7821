//! 测试支持 crate
//!
//! 提供替代宿主环境的 Mock 实现

#![no_std]

extern crate alloc;

pub mod mock;
