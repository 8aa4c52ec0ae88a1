// 協調オブジェクトのトレイト定義

use mockall::automock;

/// Container が委譲する乗算処理
#[automock]
pub trait MultiplyByFive: Send {
    /// 入力値を5倍して返す
    fn multiply_by_five(&self, number: i32) -> i32;
}

// MultiplyByFive for Box<dyn MultiplyByFive>
impl MultiplyByFive for Box<dyn MultiplyByFive> {
    fn multiply_by_five(&self, number: i32) -> i32 {
        self.as_ref().multiply_by_five(number)
    }
}
