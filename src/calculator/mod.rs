// 計算機モジュール
//
// 公開メソッドは Calculate トレイト、内部計算ステップは ValueSource トレイトで抽象化する

pub mod implementations;
pub mod traits;

// 公開API
pub use implementations::*;
pub use traits::*;
