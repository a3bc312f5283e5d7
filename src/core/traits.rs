// 試験システムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::{Stage, Subject};
use mockall::automock;

/// 行単位の出力先を抽象化するトレイト
#[automock]
pub trait Announcer: Send + Sync {
    /// 1行分のメッセージを出力
    fn announce(&self, line: &str);
}

/// 試験の抽象化トレイト
///
/// 各操作は引数を取らず、対応するアナウンスを1行だけ出力する。
/// 呼び出し順序は型では強制しない。
#[automock]
pub trait Exam: Send + Sync {
    /// この試験の科目
    fn subject(&self) -> Subject;

    /// 試験を実施
    fn conduct(&self);

    /// 試験を採点
    fn evaluate(&self);

    /// 試験結果を発表
    fn publish_results(&self);
}

impl dyn Exam {
    /// 段階を指定して対応する操作を呼び出す
    pub fn run_stage(&self, stage: Stage) {
        match stage {
            Stage::Conduct => self.conduct(),
            Stage::Evaluate => self.evaluate(),
            Stage::PublishResults => self.publish_results(),
        }
    }

    /// 実施 → 採点 → 結果発表 の順に全段階を実行
    pub fn run_lifecycle(&self) {
        for stage in Stage::ALL {
            self.run_stage(stage);
        }
    }
}

/// 試験生成の抽象ファクトリー
///
/// 呼び出しのたびに新しい試験インスタンスを返す（キャッシュしない）。
#[automock]
pub trait ExamFactory: Send + Sync {
    /// このファクトリーが生成する科目
    fn subject(&self) -> Subject;

    /// 新しい試験を生成
    fn create_exam(&self) -> Box<dyn Exam>;
}
