// サービス層 - 出力先の具象実装
// コンソール出力とテスト・ベンチマーク用の実装を提供

pub mod announcer;

pub use announcer::{ConsoleAnnouncer, MemoryAnnouncer, NoOpAnnouncer};
