//! 静的ディスパッチファクトリー
//!
//! コンパイル時に型が確定するファクトリーパターン：
//! ボックス化せずに具象型の試験を返すため、実行時オーバーヘッドがない。

use crate::core::Announcer;
use crate::exams::{MathExam, ProgrammingExam, ScienceExam};
use std::sync::Arc;

/// 静的試験ファクトリー
///
/// 型パラメータで作成する試験を指定し、コンパイル時に全ての型が確定
pub trait StaticExamFactory<T> {
    /// 試験を作成
    fn create(announcer: Arc<dyn Announcer>) -> T;

    /// 試験の型名を取得
    fn type_name() -> &'static str {
        std::any::type_name::<T>()
    }

    /// 試験の説明を取得
    fn description() -> &'static str;
}

pub struct StaticMathExamFactory;

impl StaticExamFactory<MathExam> for StaticMathExamFactory {
    fn create(announcer: Arc<dyn Announcer>) -> MathExam {
        MathExam::new(announcer)
    }

    fn description() -> &'static str {
        "数学試験 (静的ディスパッチ)"
    }
}

pub struct StaticScienceExamFactory;

impl StaticExamFactory<ScienceExam> for StaticScienceExamFactory {
    fn create(announcer: Arc<dyn Announcer>) -> ScienceExam {
        ScienceExam::new(announcer)
    }

    fn description() -> &'static str {
        "理科試験 (静的ディスパッチ)"
    }
}

pub struct StaticProgrammingExamFactory;

impl StaticExamFactory<ProgrammingExam> for StaticProgrammingExamFactory {
    fn create(announcer: Arc<dyn Announcer>) -> ProgrammingExam {
        ProgrammingExam::new(announcer)
    }

    fn description() -> &'static str {
        "プログラミング試験 (静的ディスパッチ)"
    }
}
