// 計算機の標準実装

use super::traits::{Calculate, ValueSource};

/// multiply_by_ten の乗数
pub const TEN: i32 = 10;

/// 内部処理が返す固定文字列
pub const RETURNED_VALUE: &str = "Returned value";

/// 固定文字列を返す標準の内部値ソース
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedValue;

impl ValueSource for FixedValue {
    fn internal_value(&self) -> String {
        RETURNED_VALUE.to_string()
    }
}

/// テスト対象となる計算機
///
/// 内部値ソースはコンストラクタで差し込む。省略時は `FixedValue`
#[derive(Debug, Clone, Default)]
pub struct Calculator<S = FixedValue> {
    source: S,
}

impl Calculator {
    /// 標準の内部値ソースで計算機を作成
    pub fn new() -> Self {
        Self { source: FixedValue }
    }
}

impl<S: ValueSource> Calculator<S> {
    /// 任意の内部値ソースで計算機を作成（コンストラクタインジェクション）
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// 内部値ソースへの参照
    pub fn source(&self) -> &S {
        &self.source
    }

    fn private_function(&self) -> String {
        self.source.internal_value()
    }
}

impl<S: ValueSource> Calculate for Calculator<S> {
    fn multiply_by_ten(&self, number: i32) -> i32 {
        number.wrapping_mul(TEN)
    }

    fn public_function(&self) -> String {
        self.private_function()
    }
}

// Calculate for Box<dyn Calculate>
impl Calculate for Box<dyn Calculate> {
    fn multiply_by_ten(&self, number: i32) -> i32 {
        self.as_ref().multiply_by_ten(number)
    }

    fn public_function(&self) -> String {
        self.as_ref().public_function()
    }
}
