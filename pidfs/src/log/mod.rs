//! 日志子系统
//!
//! 驱动 crate 通过 `log` 门面输出诊断信息，这里负责安装后端。
//! 诊断信息尽力而为，不影响任何文件系统调用的结果。

use log::LevelFilter;

/// 初始化日志系统
///
/// `level` 为默认级别，设置了 `RUST_LOG` 时以环境变量为准。
/// 必须在使用日志宏之前调用，且只能调用一次。
pub fn init(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}
