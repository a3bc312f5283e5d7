// 共有インスタンスの同一性テスト
use exam_patterns::core::Announcer;
use exam_patterns::printer::{Printer, SharedInstance, CREATION_NOTICE};
use exam_patterns::services::MemoryAnnouncer;
use exam_patterns::App;
use std::sync::Arc;

#[test]
fn test_identity_across_many_accesses() {
    let provider = SharedInstance::<Printer>::new();
    let announcer = MemoryAnnouncer::new();
    let shared: Arc<dyn Announcer> = Arc::new(announcer.clone());

    let first = provider.printer(&shared);
    assert!((0..100).all(|_| std::ptr::eq(first, provider.printer(&shared))));
    assert_eq!(announcer.lines(), vec![CREATION_NOTICE]);
}

#[test]
fn test_global_printer_is_stable() {
    assert!(std::ptr::eq(Printer::instance(), Printer::instance()));
}

#[test]
fn test_app_reports_same_instance() {
    let provider = SharedInstance::new();
    let announcer = MemoryAnnouncer::new();
    let app = App::new(&provider, Arc::new(announcer.clone()));

    assert!(app.check_shared_printer());
    assert_eq!(
        announcer.lines(),
        vec![CREATION_NOTICE, exam_patterns::SAME_INSTANCE_MESSAGE]
    );
}
