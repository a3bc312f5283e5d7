//! ファクトリーモジュール - 試験の生成を担当
//!
//! - 動的ディスパッチ: `ExamFactory` トレイトを実装した科目別ファクトリー
//! - 科目タグからファクトリーを引くレジストリ
//! - 静的ディスパッチ: ボックス化せず具象型を返すファクトリー

pub mod exam_factories;
pub mod registry;
pub mod static_factory;

pub use exam_factories::{MathExamFactory, ProgrammingExamFactory, ScienceExamFactory};
pub use registry::ExamFactoryRegistry;
pub use static_factory::{
    StaticExamFactory, StaticMathExamFactory, StaticProgrammingExamFactory,
    StaticScienceExamFactory,
};
