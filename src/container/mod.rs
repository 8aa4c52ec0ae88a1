// コンテナモジュール - 公開フィールドによる最小限の依存関係注入

pub mod implementations;
pub mod traits;

// 公開API
pub use implementations::*;
pub use traits::*;
