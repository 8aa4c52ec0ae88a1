// 協調オブジェクトとそれを保持するコンテナの実装

use super::traits::MultiplyByFive;
use crate::error::{ShowcaseError, ShowcaseResult};

/// multiply_by_five の乗数
pub const FIVE: i32 = 5;

/// 本物の協調オブジェクト
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Injected;

impl MultiplyByFive for Injected {
    fn multiply_by_five(&self, number: i32) -> i32 {
        number.wrapping_mul(FIVE)
    }
}

/// 協調オブジェクトを外部から差し込まれるコンテナ
///
/// `injected` は公開フィールドで、テスト側が直接代入してもよい。
/// 代入前に委譲処理を呼ぶと `UninitializedDependency` エラーになる
#[derive(Debug)]
pub struct Container<I = Injected> {
    pub injected: Option<I>,
}

impl<I> Default for Container<I> {
    fn default() -> Self {
        Self { injected: None }
    }
}

impl<I> Container<I> {
    /// 協調オブジェクト未設定のコンテナを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 協調オブジェクトを設定済みのコンテナを作成
    pub fn with_injected(injected: I) -> Self {
        Self {
            injected: Some(injected),
        }
    }

    /// 協調オブジェクトを設定（既存の値は置き換える）
    pub fn set_injected(&mut self, injected: I) {
        self.injected = Some(injected);
    }

    /// 協調オブジェクトが設定済みかどうか
    pub fn is_initialized(&self) -> bool {
        self.injected.is_some()
    }

    /// 協調オブジェクトへの参照を取得
    pub fn injected(&self) -> ShowcaseResult<&I> {
        self.injected.as_ref().ok_or_else(|| {
            tracing::warn!(field = "injected", "協調オブジェクトが設定される前にアクセスされました");
            ShowcaseError::uninitialized("injected")
        })
    }
}

impl<I: MultiplyByFive> Container<I> {
    /// 引数を協調オブジェクトの multiply_by_five へそのまま渡し、その結果を返す
    pub fn delegate_multiply(&self, number: i32) -> ShowcaseResult<i32> {
        let injected = self.injected()?;
        let result = injected.multiply_by_five(number);
        tracing::debug!(number, result, "multiply_by_five へ委譲しました");
        Ok(result)
    }
}
