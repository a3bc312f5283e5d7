// 出力先の具象実装

use crate::core::Announcer;
use std::sync::{Arc, Mutex};

/// 標準出力への出力実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleAnnouncer;

impl ConsoleAnnouncer {
    pub fn new() -> Self {
        Self
    }

    pub fn shared() -> Arc<dyn Announcer> {
        Arc::new(Self::new())
    }
}

impl Announcer for ConsoleAnnouncer {
    fn announce(&self, line: &str) {
        println!("{line}");
    }
}

/// 出力行をメモリに記録する実装（テスト用）
///
/// クローンは同じバッファを共有する。
#[derive(Debug, Default, Clone)]
pub struct MemoryAnnouncer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済みの行のスナップショット
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// 指定した行が出力された回数
    pub fn count(&self, line: &str) -> usize {
        self.lines().iter().filter(|l| l.as_str() == line).count()
    }

    pub fn clear(&self) {
        match self.lines.lock() {
            Ok(mut lines) => lines.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Announcer for MemoryAnnouncer {
    fn announce(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

/// 何もしない出力実装（ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpAnnouncer;

impl NoOpAnnouncer {
    pub fn new() -> Self {
        Self
    }
}

impl Announcer for NoOpAnnouncer {
    fn announce(&self, _line: &str) {
        // 何もしない
    }
}
