// 計算機能のトレイト定義

use mockall::automock;

/// 計算機の公開インターフェース
#[automock]
pub trait Calculate: Send {
    /// 入力値を10倍して返す
    fn multiply_by_ten(&self, number: i32) -> i32;

    /// 内部処理の結果をそのまま返す
    fn public_function(&self) -> String;
}

/// 内部計算ステップの差し替え口
///
/// 非公開メソッドを直接モックする代わりに、このトレイト越しに値を供給する
#[automock]
pub trait ValueSource: Send {
    fn internal_value(&self) -> String;
}
