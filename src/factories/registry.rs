//! 科目タグからファクトリーを引くレジストリ

use super::exam_factories::{MathExamFactory, ProgrammingExamFactory, ScienceExamFactory};
use crate::core::{Announcer, Exam, ExamFactory, ExamResult, Subject};
use std::collections::BTreeMap;
use std::sync::Arc;

/// ファクトリーのコンストラクタ
pub type FactoryConstructor = fn(Arc<dyn Announcer>) -> Box<dyn ExamFactory>;

fn math_factory(announcer: Arc<dyn Announcer>) -> Box<dyn ExamFactory> {
    Box::new(MathExamFactory::with_announcer(announcer))
}

fn science_factory(announcer: Arc<dyn Announcer>) -> Box<dyn ExamFactory> {
    Box::new(ScienceExamFactory::with_announcer(announcer))
}

fn programming_factory(announcer: Arc<dyn Announcer>) -> Box<dyn ExamFactory> {
    Box::new(ProgrammingExamFactory::with_announcer(announcer))
}

struct RegistryEntry {
    constructor: FactoryConstructor,
    description: &'static str,
}

/// 試験ファクトリーレジストリ
pub struct ExamFactoryRegistry {
    announcer: Arc<dyn Announcer>,
    entries: BTreeMap<Subject, RegistryEntry>,
}

impl ExamFactoryRegistry {
    /// 全科目を登録したレジストリを作成
    pub fn new(announcer: Arc<dyn Announcer>) -> Self {
        let mut registry = Self {
            announcer,
            entries: BTreeMap::new(),
        };

        registry.register(Subject::Math, math_factory, "数学試験");
        registry.register(Subject::Science, science_factory, "理科試験");
        registry.register(
            Subject::Programming,
            programming_factory,
            "プログラミング試験",
        );

        registry
    }

    fn register(
        &mut self,
        subject: Subject,
        constructor: FactoryConstructor,
        description: &'static str,
    ) {
        self.entries.insert(
            subject,
            RegistryEntry {
                constructor,
                description,
            },
        );
    }

    /// 科目に対応するファクトリーを作成
    pub fn factory_for(&self, subject: Subject) -> Box<dyn ExamFactory> {
        match self.entries.get(&subject) {
            Some(entry) => (entry.constructor)(Arc::clone(&self.announcer)),
            // new() で全科目を登録済み
            None => unreachable!("subject {subject} is not registered"),
        }
    }

    /// 科目を指定して試験を作成
    pub fn create_exam(&self, subject: Subject) -> Box<dyn Exam> {
        self.factory_for(subject).create_exam()
    }

    /// 科目名から試験を作成
    pub fn create_exam_by_name(&self, name: &str) -> ExamResult<Box<dyn Exam>> {
        let subject: Subject = name.parse()?;
        Ok(self.create_exam(subject))
    }

    /// 実行順に並べた全ファクトリー
    pub fn factories(&self) -> Vec<Box<dyn ExamFactory>> {
        Subject::ALL
            .into_iter()
            .map(|subject| self.factory_for(subject))
            .collect()
    }

    /// 利用可能な科目名の一覧
    pub fn available_subjects(&self) -> Vec<String> {
        self.entries
            .keys()
            .map(|subject| subject.key().to_string())
            .collect()
    }

    /// 科目の説明を取得
    pub fn get_description(&self, name: &str) -> Option<String> {
        let subject: Subject = name.parse().ok()?;
        self.entries
            .get(&subject)
            .map(|entry| entry.description.to_string())
    }
}
