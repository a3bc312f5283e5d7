// 数学試験

use super::announce_stage;
use crate::core::{Announcer, Exam, Stage, Subject};
use crate::services::ConsoleAnnouncer;
use std::sync::Arc;

/// 数学試験
#[derive(Clone)]
pub struct MathExam {
    announcer: Arc<dyn Announcer>,
}

impl MathExam {
    pub fn new(announcer: Arc<dyn Announcer>) -> Self {
        Self { announcer }
    }
}

impl Default for MathExam {
    fn default() -> Self {
        Self::new(ConsoleAnnouncer::shared())
    }
}

impl Exam for MathExam {
    fn subject(&self) -> Subject {
        Subject::Math
    }

    fn conduct(&self) {
        announce_stage(self.announcer.as_ref(), Subject::Math, Stage::Conduct);
    }

    fn evaluate(&self) {
        announce_stage(self.announcer.as_ref(), Subject::Math, Stage::Evaluate);
    }

    fn publish_results(&self) {
        announce_stage(self.announcer.as_ref(), Subject::Math, Stage::PublishResults);
    }
}
