//! 共有インスタンス（シングルトン）
//!
//! `SharedInstance<T>` は初回アクセス時に一度だけ初期化されるセル。
//! 初回生成は `OnceLock` で同期されるため、複数スレッドから同時に
//! アクセスされても初期化処理は一度しか実行されない。
//!
//! プロセス全体で共有されるプリンターは [`Printer::instance`] から取得する。
//! テストではローカルな `SharedInstance<Printer>` を使えば、生成通知を
//! 独立して観測できる。

use crate::core::Announcer;
use crate::services::ConsoleAnnouncer;
use std::sync::{Arc, OnceLock};

/// 生成時に一度だけ出力される通知
pub const CREATION_NOTICE: &str = "Printer instance created";

/// 初回アクセス時に生成され、以降は同じ参照を返すセル
#[derive(Debug)]
pub struct SharedInstance<T> {
    cell: OnceLock<T>,
}

impl<T> SharedInstance<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// 未生成なら `create` で生成し、常に同じ参照を返す
    pub fn get_or_create(&self, create: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(create)
    }

    /// 生成済みであれば参照を返す
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_created(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for SharedInstance<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// プロセス全体で共有されるプリンター
static GLOBAL_PRINTER: SharedInstance<Printer> = SharedInstance::new();

/// プリンター
///
/// コンストラクタは公開せず、`SharedInstance<Printer>` 経由でのみ生成する。
pub struct Printer {
    announcer: Arc<dyn Announcer>,
}

impl Printer {
    fn create(announcer: Arc<dyn Announcer>) -> Self {
        tracing::debug!("shared printer initialised");
        announcer.announce(CREATION_NOTICE);
        Self { announcer }
    }

    /// グローバルなプリンターを取得（初回のみ生成通知を出力）
    pub fn instance() -> &'static Printer {
        GLOBAL_PRINTER.get_or_create(|| Printer::create(ConsoleAnnouncer::shared()))
    }

    /// グローバルなプリンターの提供元
    pub fn global() -> &'static SharedInstance<Printer> {
        &GLOBAL_PRINTER
    }

    /// メッセージを整形して1行出力
    pub fn print(&self, message: &str) {
        self.announcer.announce(&format!("Printing: {message}"));
    }
}

impl SharedInstance<Printer> {
    /// プリンターを取得（未生成なら `announcer` に出力するプリンターを生成）
    ///
    /// 生成済みの場合 `announcer` は使われない。
    pub fn printer(&self, announcer: &Arc<dyn Announcer>) -> &Printer {
        self.get_or_create(|| Printer::create(Arc::clone(announcer)))
    }
}
