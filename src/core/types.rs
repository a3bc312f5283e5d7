// 試験に関連するデータ型定義

use super::error::{ExamError, ExamResult};
use std::fmt;
use std::str::FromStr;

/// 試験科目（閉じた集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subject {
    Math,
    Science,
    Programming,
}

impl Subject {
    /// 実行順に並べた全科目
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Science, Subject::Programming];

    /// アナウンスに埋め込まれる表示名
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::Science => "Science",
            Self::Programming => "Programming",
        }
    }

    /// 名前で検索する際のキー
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Science => "science",
            Self::Programming => "programming",
        }
    }

    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(Subject::key).collect()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Subject {
    type Err = ExamError;

    fn from_str(s: &str) -> ExamResult<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|subject| subject.key() == normalized)
            .ok_or_else(|| ExamError::unknown_subject(s, &Self::keys()))
    }
}

/// 試験のライフサイクル段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Conduct,
    Evaluate,
    PublishResults,
}

impl Stage {
    /// 実施 → 採点 → 結果発表
    pub const ALL: [Stage; 3] = [Stage::Conduct, Stage::Evaluate, Stage::PublishResults];

    /// 指定科目に対するアナウンス文を生成
    pub fn announcement(&self, subject: Subject) -> String {
        let name = subject.name();
        match self {
            Self::Conduct => format!("Conducting {name} Exam"),
            Self::Evaluate => format!("Evaluating {name} Exam"),
            Self::PublishResults => format!("Publishing {name} Exam Results"),
        }
    }
}
