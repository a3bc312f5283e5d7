//! 試験の具象実装
//!
//! 3つの試験はアナウンスに埋め込まれる科目名だけが異なり、状態を持たない。
//! 出力先は生成元のファクトリーから注入される。

pub mod math;
pub mod programming;
pub mod science;

pub use math::MathExam;
pub use programming::ProgrammingExam;
pub use science::ScienceExam;

use crate::core::{Announcer, Stage, Subject};

/// 段階のアナウンスを1行出力
pub(crate) fn announce_stage(announcer: &dyn Announcer, subject: Subject, stage: Stage) {
    tracing::trace!(subject = subject.name(), ?stage, "exam stage");
    announcer.announce(&stage.announcement(subject));
}
