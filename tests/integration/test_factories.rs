// 公開APIを通したファクトリーの振る舞いテスト
use exam_patterns::core::{Announcer, Exam, ExamFactory, Subject};
use exam_patterns::factories::{
    ExamFactoryRegistry, MathExamFactory, ProgrammingExamFactory, ScienceExamFactory,
};
use exam_patterns::services::MemoryAnnouncer;
use std::sync::Arc;

fn memory() -> (MemoryAnnouncer, Arc<dyn Announcer>) {
    let announcer = MemoryAnnouncer::new();
    let shared: Arc<dyn Announcer> = Arc::new(announcer.clone());
    (announcer, shared)
}

fn same_object(a: &dyn Exam, b: &dyn Exam) -> bool {
    std::ptr::eq(a as *const dyn Exam as *const (), b as *const dyn Exam as *const ())
}

#[test]
fn test_science_factory_independence() {
    let (announcer, shared) = memory();
    let factory = ScienceExamFactory::with_announcer(shared);

    let first = factory.create_exam();
    let second = factory.create_exam();
    assert!(!same_object(first.as_ref(), second.as_ref()));

    first.conduct();
    second.conduct();
    assert_eq!(
        announcer.lines(),
        vec!["Conducting Science Exam", "Conducting Science Exam"]
    );
}

#[test]
fn test_each_factory_produces_equivalent_fresh_exams() {
    let factories: Vec<(Box<dyn ExamFactory>, MemoryAnnouncer)> = [
        Subject::Math,
        Subject::Science,
        Subject::Programming,
    ]
    .into_iter()
    .map(|subject| {
        let (out, shared) = memory();
        let factory: Box<dyn ExamFactory> = match subject {
            Subject::Math => Box::new(MathExamFactory::with_announcer(shared)),
            Subject::Science => Box::new(ScienceExamFactory::with_announcer(shared)),
            Subject::Programming => Box::new(ProgrammingExamFactory::with_announcer(shared)),
        };
        (factory, out)
    })
    .collect();

    for (factory, out) in &factories {
        let first = factory.create_exam();
        first.conduct();
        first.evaluate();
        first.publish_results();
        let first_lines = out.lines();
        out.clear();

        let second = factory.create_exam();
        second.conduct();
        second.evaluate();
        second.publish_results();

        assert!(!same_object(first.as_ref(), second.as_ref()));
        assert_eq!(first_lines, out.lines());
        assert_eq!(first_lines.len(), 3);
        assert!(first_lines
            .iter()
            .all(|line| line.contains(factory.subject().name())));
    }
}

#[test]
fn test_registry_lookup_by_name() {
    let (announcer, shared) = memory();
    let registry = ExamFactoryRegistry::new(shared);

    let exam = registry.create_exam_by_name("math").unwrap();
    exam.publish_results();
    assert!(registry.create_exam_by_name("history").is_err());

    assert_eq!(announcer.lines(), vec!["Publishing Math Exam Results"]);
}
