// プロセス全体で共有される結合オブジェクト
//
// 関連関数（レシーバなし）として定義しているため、MockConcat は静的な
// 期待値コンテキスト（MockConcat::concat_context）を通じてモックする

use mockall::automock;

/// 文字列結合の抽象化トレイト
#[automock]
pub trait Concat {
    /// 2つの文字列をこの順に連結する
    fn concat(first: &str, second: &str) -> String;

    /// インスタンス経由で2つの文字列を連結する
    fn join(&self, first: &str, second: &str) -> String;
}

/// 状態を持たない標準の結合オブジェクト
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Joiner;

impl Concat for Joiner {
    fn concat(first: &str, second: &str) -> String {
        let mut joined = String::with_capacity(first.len() + second.len());
        joined.push_str(first);
        joined.push_str(second);
        joined
    }

    fn join(&self, first: &str, second: &str) -> String {
        Self::concat(first, second)
    }
}

/// 結合オブジェクトを使って挨拶文を作る
pub fn greet<J: Concat>(name: &str) -> String {
    J::concat("Hello, ", name)
}
