// 理科試験

use super::announce_stage;
use crate::core::{Announcer, Exam, Stage, Subject};
use crate::services::ConsoleAnnouncer;
use std::sync::Arc;

#[derive(Clone)]
pub struct ScienceExam {
    announcer: Arc<dyn Announcer>,
}

impl ScienceExam {
    pub fn new(announcer: Arc<dyn Announcer>) -> Self {
        Self { announcer }
    }
}

impl Default for ScienceExam {
    fn default() -> Self {
        Self::new(ConsoleAnnouncer::shared())
    }
}

impl Exam for ScienceExam {
    fn subject(&self) -> Subject {
        Subject::Science
    }

    fn conduct(&self) {
        announce_stage(self.announcer.as_ref(), Subject::Science, Stage::Conduct);
    }

    fn evaluate(&self) {
        announce_stage(self.announcer.as_ref(), Subject::Science, Stage::Evaluate);
    }

    fn publish_results(&self) {
        announce_stage(
            self.announcer.as_ref(),
            Subject::Science,
            Stage::PublishResults,
        );
    }
}
