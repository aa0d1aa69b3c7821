//! 打开标志

bitflags::bitflags! {
    /// `open(2)` 标志位（Linux 数值）
    ///
    /// 只保留驱动需要区分的位；其余位通过 `from_bits_retain` 原样保留。
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpenFlags: i32 {
        /// 只读
        const O_RDONLY    = 0o0;
        /// 只写
        const O_WRONLY    = 0o1;
        /// 读写
        const O_RDWR      = 0o2;
        /// 访问模式掩码
        const O_ACCMODE   = 0o3;
        /// 截断
        const O_TRUNC     = 0o1000;
        /// 追加写
        const O_APPEND    = 0o2000;
        /// 非阻塞
        const O_NONBLOCK  = 0o4000;
    }
}

/// 访问模式（`flags & O_ACCMODE`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// 只读
    ReadOnly,
    /// 只写
    WriteOnly,
    /// 读写
    ReadWrite,
}

impl OpenFlags {
    /// 从原始标志构造，保留未知位
    pub fn from_raw(raw: i32) -> Self {
        Self::from_bits_retain(raw)
    }

    /// 解析访问模式
    ///
    /// 非法值 `3` 视为读写：它同样带有写意图。
    pub fn access_mode(&self) -> AccessMode {
        match self.bits() & Self::O_ACCMODE.bits() {
            0 => AccessMode::ReadOnly,
            1 => AccessMode::WriteOnly,
            _ => AccessMode::ReadWrite,
        }
    }

    /// 是否只请求读权限
    pub fn is_read_only(&self) -> bool {
        self.access_mode() == AccessMode::ReadOnly
    }
}
