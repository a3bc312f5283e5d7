//! 科目別の ExamFactory 実装 - Abstract Factory Pattern

use crate::core::{Announcer, Exam, ExamFactory, Subject};
use crate::exams::{MathExam, ProgrammingExam, ScienceExam};
use crate::services::ConsoleAnnouncer;
use std::sync::Arc;

/// MathExamファクトリー
#[derive(Clone)]
pub struct MathExamFactory {
    announcer: Arc<dyn Announcer>,
}

impl MathExamFactory {
    /// コンソール出力のファクトリーを作成
    pub fn new() -> Self {
        Self::with_announcer(ConsoleAnnouncer::shared())
    }

    /// 出力先を指定してファクトリーを作成
    pub fn with_announcer(announcer: Arc<dyn Announcer>) -> Self {
        tracing::debug!(subject = "Math", "exam factory constructed");
        Self { announcer }
    }
}

impl Default for MathExamFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ExamFactory for MathExamFactory {
    fn subject(&self) -> Subject {
        Subject::Math
    }

    fn create_exam(&self) -> Box<dyn Exam> {
        tracing::debug!(subject = "Math", "exam created");
        Box::new(MathExam::new(Arc::clone(&self.announcer)))
    }
}

/// ScienceExamファクトリー
#[derive(Clone)]
pub struct ScienceExamFactory {
    announcer: Arc<dyn Announcer>,
}

impl ScienceExamFactory {
    pub fn new() -> Self {
        Self::with_announcer(ConsoleAnnouncer::shared())
    }

    pub fn with_announcer(announcer: Arc<dyn Announcer>) -> Self {
        tracing::debug!(subject = "Science", "exam factory constructed");
        Self { announcer }
    }
}

impl Default for ScienceExamFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ExamFactory for ScienceExamFactory {
    fn subject(&self) -> Subject {
        Subject::Science
    }

    fn create_exam(&self) -> Box<dyn Exam> {
        tracing::debug!(subject = "Science", "exam created");
        Box::new(ScienceExam::new(Arc::clone(&self.announcer)))
    }
}

/// ProgrammingExamファクトリー
#[derive(Clone)]
pub struct ProgrammingExamFactory {
    announcer: Arc<dyn Announcer>,
}

impl ProgrammingExamFactory {
    pub fn new() -> Self {
        Self::with_announcer(ConsoleAnnouncer::shared())
    }

    pub fn with_announcer(announcer: Arc<dyn Announcer>) -> Self {
        tracing::debug!(subject = "Programming", "exam factory constructed");
        Self { announcer }
    }
}

impl Default for ProgrammingExamFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ExamFactory for ProgrammingExamFactory {
    fn subject(&self) -> Subject {
        Subject::Programming
    }

    fn create_exam(&self) -> Box<dyn Exam> {
        tracing::debug!(subject = "Programming", "exam created");
        Box::new(ProgrammingExam::new(Arc::clone(&self.announcer)))
    }
}
