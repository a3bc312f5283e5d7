// 試験ファクトリー周りのエラー型定義

use thiserror::Error;

/// 試験の生成に関するエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExamError {
    #[error("未サポートの試験科目: {name}. 利用可能: {available}")]
    UnknownSubject { name: String, available: String },
}

impl ExamError {
    /// 未知の科目エラーの作成
    pub fn unknown_subject(name: impl Into<String>, available: &[&str]) -> Self {
        Self::UnknownSubject {
            name: name.into(),
            available: available.join(", "),
        }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::UnknownSubject { name, available } => ErrorContext::new("subject_lookup")
                .with_resource(name.clone())
                .with_suggestion(format!("次のいずれかを指定してください: {available}")),
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース（科目名等）
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// 試験生成の結果型
pub type ExamResult<T> = std::result::Result<T, ExamError>;
