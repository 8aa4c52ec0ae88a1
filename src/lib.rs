// mockallによるテストダブルの使い方を示すサンプル集
//
// テスト対象はごく小さな型だけで構成されている：
// - calculator: 定数倍と内部値の取得
// - container:  外部から差し込まれる協調オブジェクトへの委譲
// - joiner:     プロセス全体で共有されるシングルトン的な結合オブジェクト
//
// 各トレイトには #[automock] が付いており、Mock* 型は結合テストからも利用できる。

pub mod calculator;
pub mod container;
pub mod error;
pub mod joiner;

// 公開API
pub use calculator::{Calculate, Calculator, FixedValue, MockCalculate, MockValueSource, ValueSource};
pub use container::{Container, Injected, MockMultiplyByFive, MultiplyByFive};
pub use error::{ShowcaseError, ShowcaseResult};
pub use joiner::{greet, Concat, Joiner, MockConcat};
