//! FUSE inode 编号表
//!
//! 内核以 inode 编号而不是路径调用文件系统，这里负责两者之间的映射。
//! 规范的进程号（无前导零）直接映射为 `PID_INO_BASE + pid`，无需记录；
//! 其余语法合法的名称（如 `007`、超长数字串）在 lookup 时分配别名编号，
//! 并按内核的 lookup 计数在 `forget` 时回收。

use std::collections::BTreeMap;

/// 根目录 inode 编号
pub const ROOT_INO: u64 = fuser::FUSE_ROOT_ID;

/// 进程条目编号起点
const PID_INO_BASE: u64 = ROOT_INO + 1;

/// 别名编号起点
const ALIAS_INO_BASE: u64 = 1 << 62;

/// 枚举中尚未分配别名的条目使用的编号，永不分配
pub const UNASSIGNED_INO: u64 = u64::MAX;

struct Alias {
    name: String,
    lookups: u64,
}

/// inode 编号与条目名之间的映射
pub struct InodeTable {
    aliases: BTreeMap<u64, Alias>,
    alias_by_name: BTreeMap<String, u64>,
    next_alias: u64,
}

impl InodeTable {
    /// 创建空表
    pub fn new() -> Self {
        Self {
            aliases: BTreeMap::new(),
            alias_by_name: BTreeMap::new(),
            next_alias: ALIAS_INO_BASE,
        }
    }

    /// 内核 lookup 一个条目：返回其编号，并为别名增加一次引用计数
    ///
    /// 别名只在这里分配，内核随后会以 `forget` 归还同样次数的引用。
    pub fn lookup(&mut self, name: &str) -> u64 {
        if let Some(pid) = canonical_pid(name) {
            return PID_INO_BASE + pid;
        }
        if let Some(&ino) = self.alias_by_name.get(name) {
            if let Some(alias) = self.aliases.get_mut(&ino) {
                alias.lookups += 1;
            }
            return ino;
        }

        let ino = self.next_alias;
        self.next_alias += 1;
        self.aliases.insert(
            ino,
            Alias {
                name: name.to_string(),
                lookups: 1,
            },
        );
        self.alias_by_name.insert(name.to_string(), ino);
        ino
    }

    /// 目录枚举时使用的编号，不分配别名
    ///
    /// 尚未被 lookup 的非规范名称返回 [`UNASSIGNED_INO`]；内核只把它用作
    /// `d_ino`，随后的访问仍会先经过 lookup。
    pub fn listing_ino(&self, name: &str) -> u64 {
        if let Some(pid) = canonical_pid(name) {
            return PID_INO_BASE + pid;
        }
        self.alias_by_name
            .get(name)
            .copied()
            .unwrap_or(UNASSIGNED_INO)
    }

    /// inode 编号对应的条目名，根目录与未知编号返回 `None`
    pub fn name_of(&self, ino: u64) -> Option<String> {
        if ino >= ALIAS_INO_BASE {
            return self.aliases.get(&ino).map(|alias| alias.name.clone());
        }
        if ino >= PID_INO_BASE {
            return Some((ino - PID_INO_BASE).to_string());
        }
        None
    }

    /// 内核释放 `nlookup` 次引用，计数归零时回收别名
    pub fn forget(&mut self, ino: u64, nlookup: u64) {
        let Some(alias) = self.aliases.get_mut(&ino) else {
            return;
        };
        alias.lookups = alias.lookups.saturating_sub(nlookup);
        if alias.lookups == 0 {
            if let Some(alias) = self.aliases.remove(&ino) {
                self.alias_by_name.remove(&alias.name);
            }
        }
    }

    /// 当前别名数量
    #[cfg(test)]
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

impl Default for InodeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// 规范十进制进程号：无前导零，且映射后不与别名区间重叠
fn canonical_pid(name: &str) -> Option<u64> {
    if name.is_empty() || (name.len() > 1 && name.starts_with('0')) {
        return None;
    }
    if !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<u64>()
        .ok()
        .filter(|pid| *pid < ALIAS_INO_BASE - PID_INO_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_pid_is_stable() {
        let mut table = InodeTable::new();
        let ino = table.lookup("4321");
        assert_eq!(ino, PID_INO_BASE + 4321);
        assert_eq!(table.lookup("4321"), ino);
        assert_eq!(table.listing_ino("4321"), ino);
        assert_eq!(table.name_of(ino).as_deref(), Some("4321"));
        assert_eq!(table.alias_count(), 0);
    }

    #[test]
    fn test_pid_zero() {
        let mut table = InodeTable::new();
        let ino = table.lookup("0");
        assert_ne!(ino, ROOT_INO);
        assert_eq!(table.name_of(ino).as_deref(), Some("0"));
    }

    #[test]
    fn test_leading_zero_gets_alias() {
        let mut table = InodeTable::new();
        let plain = table.lookup("42");
        let padded = table.lookup("0042");
        assert_ne!(plain, padded);
        assert_eq!(table.name_of(padded).as_deref(), Some("0042"));
        assert_eq!(table.lookup("0042"), padded);
        assert_eq!(table.alias_count(), 1);
    }

    #[test]
    fn test_huge_number_gets_alias() {
        let mut table = InodeTable::new();
        let name = "123456789012345678901234567890";
        let ino = table.lookup(name);
        assert!(ino >= ALIAS_INO_BASE);
        assert_eq!(table.name_of(ino).as_deref(), Some(name));
    }

    #[test]
    fn test_root_and_unknown() {
        let table = InodeTable::new();
        assert_eq!(table.name_of(ROOT_INO), None);
        assert_eq!(table.name_of(ALIAS_INO_BASE + 5), None);
        assert_eq!(table.name_of(UNASSIGNED_INO), None);
    }

    #[test]
    fn test_listing_does_not_allocate() {
        let mut table = InodeTable::new();
        for _ in 0..3 {
            assert_eq!(table.listing_ino("007"), UNASSIGNED_INO);
            assert_eq!(table.listing_ino("0"), PID_INO_BASE);
        }
        assert_eq!(table.alias_count(), 0);

        // lookup 之后枚举给出同一个编号
        let ino = table.lookup("007");
        assert_eq!(table.listing_ino("007"), ino);
        assert_eq!(table.alias_count(), 1);
    }

    #[test]
    fn test_forget_releases_alias() {
        let mut table = InodeTable::new();
        let ino = table.lookup("01");
        assert_eq!(table.lookup("01"), ino);

        table.forget(ino, 1);
        assert_eq!(table.name_of(ino).as_deref(), Some("01"));

        table.forget(ino, 1);
        assert_eq!(table.name_of(ino), None);
        assert_eq!(table.alias_count(), 0);
        assert_eq!(table.listing_ino("01"), UNASSIGNED_INO);

        // 对规范编号调用 forget 无副作用
        let pid_ino = table.lookup("7");
        table.forget(pid_ino, 3);
        assert_eq!(table.name_of(pid_ino).as_deref(), Some("7"));
    }
}
