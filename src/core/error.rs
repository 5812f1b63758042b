// ベンチマーク基盤のカスタムエラー型定義
// 測定コアは数値の全域関数のみで構成され、エラーは設定と入出力に限られる

use thiserror::Error;

/// ベンチマーク基盤固有のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("設定ファイルエラー: {path} - {source}")]
    ConfigFileError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("レポート出力エラー: {path} - {source}")]
    ReportExportError {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

impl BenchError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 設定ファイルエラーの作成
    pub fn config_file(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::ConfigFileError {
            path: path.into(),
            source,
        }
    }

    /// レポート出力エラーの作成
    pub fn report_export(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::ReportExportError {
            path: path.into(),
            source,
        }
    }

    /// エラーが回復可能かどうかを判定
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ConfigurationError { .. } | Self::ValidationError { .. } => false,
            Self::ConfigFileError { .. } | Self::ReportExportError { .. } => true,
        }
    }
}

/// ベンチマーク処理の結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;
