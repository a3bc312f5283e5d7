pub mod cli;
pub mod core;
pub mod exams;
pub mod factories;
pub mod printer;
pub mod services;

use crate::core::Announcer;
use factories::ExamFactoryRegistry;
use printer::{Printer, SharedInstance};
use std::sync::Arc;

pub const SAME_INSTANCE_MESSAGE: &str = "printer1 and printer2 are the same.";
pub const DIFFERENT_INSTANCE_MESSAGE: &str = "printer1 and printer2 are different.";

// デモ全体を駆動するApp構造体
// 共有プリンターの提供元と出力先をコンストラクタで受け取る
pub struct App<'a> {
    printers: &'a SharedInstance<Printer>,
    announcer: Arc<dyn Announcer>,
}

impl<'a> App<'a> {
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(printers: &'a SharedInstance<Printer>, announcer: Arc<dyn Announcer>) -> Self {
        Self {
            printers,
            announcer,
        }
    }

    /// 共有プリンターの同一性確認と、全科目の試験ライフサイクルを順に実行
    pub fn run(&self) {
        self.check_shared_printer();
        self.run_exams();
    }

    /// プリンターを2回取得し、同一インスタンスかどうかを出力
    pub fn check_shared_printer(&self) -> bool {
        let printer1 = self.printers.printer(&self.announcer);
        let printer2 = self.printers.printer(&self.announcer);

        let same = std::ptr::eq(printer1, printer2);
        if same {
            self.announcer.announce(SAME_INSTANCE_MESSAGE);
        } else {
            // OnceLockの下では到達しない
            tracing::warn!("shared printer returned two different instances");
            self.announcer.announce(DIFFERENT_INSTANCE_MESSAGE);
        }
        same
    }

    /// 数学 → 理科 → プログラミング の順に試験を実施
    pub fn run_exams(&self) {
        let registry = ExamFactoryRegistry::new(Arc::clone(&self.announcer));
        let exams: Vec<_> = registry
            .factories()
            .iter()
            .map(|factory| factory.create_exam())
            .collect();

        for exam in &exams {
            tracing::debug!(subject = exam.subject().name(), "running exam lifecycle");
            exam.run_lifecycle();
        }
    }
}

impl App<'static> {
    /// グローバルなプリンターとコンソール出力を使うApp
    pub fn console() -> Self {
        App::new(Printer::global(), services::ConsoleAnnouncer::shared())
    }
}
