//! FS 宿主操作 trait 定义
//!
//! 此模块定义了驱动需要的外部依赖接口，通过 trait 抽象实现与宿主进程表的解耦。
//! 二进制 crate 基于真实的 `/proc` 实现此 trait；测试使用 `test-support` 中的 Mock。

use alloc::string::String;
use alloc::vec::Vec;

use vfs::FsError;

/// 宿主进程表
///
/// 宿主进程表是外部共享资源，进程随时可能创建或退出；
/// 实现不得假设两次调用之间条目保持不变。
pub trait ProcessSource: Send + Sync {
    /// 读取 `name` 对应进程的状态报告，最多填满 `buf`，返回读取的字节数
    ///
    /// 必须先确认状态资源已成功打开再读取。资源无法打开时返回
    /// [`FsError::Unavailable`]，读取中途出错返回 [`FsError::IoError`]。
    fn read_status(&self, name: &str, buf: &mut [u8]) -> Result<usize, FsError>;

    /// 列出进程表中当前的全部条目名（包括非进程条目），顺序由宿主决定
    fn list_entries(&self) -> Result<Vec<String>, FsError>;
}
