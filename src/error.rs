// サンプル全体で使うエラー型定義

use thiserror::Error;

/// ドメインロジックで発生しうるエラー
///
/// モックの未設定呼び出しなどはmockall側のpanicとして現れるため、ここには含めない
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    #[error("依存関係が未初期化です (uninitialized dependency): {name}")]
    UninitializedDependency { name: &'static str },
}

impl ShowcaseError {
    /// 未初期化依存関係エラーの作成
    pub fn uninitialized(name: &'static str) -> Self {
        Self::UninitializedDependency { name }
    }

    /// 未初期化依存関係エラーかどうか
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::UninitializedDependency { .. })
    }
}

/// Result型エイリアス
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;
