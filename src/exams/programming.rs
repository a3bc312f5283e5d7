// プログラミング試験

use super::announce_stage;
use crate::core::{Announcer, Exam, Stage, Subject};
use crate::services::ConsoleAnnouncer;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProgrammingExam {
    announcer: Arc<dyn Announcer>,
}

impl ProgrammingExam {
    pub fn new(announcer: Arc<dyn Announcer>) -> Self {
        Self { announcer }
    }
}

impl Default for ProgrammingExam {
    fn default() -> Self {
        Self::new(ConsoleAnnouncer::shared())
    }
}

impl Exam for ProgrammingExam {
    fn subject(&self) -> Subject {
        Subject::Programming
    }

    fn conduct(&self) {
        announce_stage(self.announcer.as_ref(), Subject::Programming, Stage::Conduct);
    }

    fn evaluate(&self) {
        announce_stage(self.announcer.as_ref(), Subject::Programming, Stage::Evaluate);
    }

    fn publish_results(&self) {
        announce_stage(
            self.announcer.as_ref(),
            Subject::Programming,
            Stage::PublishResults,
        );
    }
}
