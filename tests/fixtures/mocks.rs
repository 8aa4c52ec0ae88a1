// テスト用のモック生成ヘルパー

use mock_showcase::{Calculate, Calculator, Container, MockCalculate, MockMultiplyByFive};
use std::sync::{Arc, Mutex, PoisonError};

/// 全メソッドが型のデフォルト値を返す「緩い」モック
pub fn relaxed_calculator() -> MockCalculate {
    let mut mock = MockCalculate::new();
    mock.expect_multiply_by_ten().return_const(i32::default());
    mock.expect_public_function().return_const(String::default());
    mock
}

/// 本物の Calculator に処理を委ねつつ呼び出しを記録するスパイ
pub fn spy_calculator() -> MockCalculate {
    let mut spy = MockCalculate::new();

    let real = Calculator::new();
    spy.expect_multiply_by_ten()
        .returning(move |number| real.multiply_by_ten(number));

    let real = Calculator::new();
    spy.expect_public_function()
        .returning(move || real.public_function());

    spy
}

/// モック呼び出し時の引数を保存するスロット
///
/// クローンは同じ保存先を共有するので、片方を `returning` のクロージャに渡して使う
#[derive(Debug)]
pub struct ArgumentSlot<T> {
    captured: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for ArgumentSlot<T> {
    fn clone(&self) -> Self {
        Self {
            captured: Arc::clone(&self.captured),
        }
    }
}

impl<T> Default for ArgumentSlot<T> {
    fn default() -> Self {
        Self {
            captured: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T: Clone> ArgumentSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を保存する（最後に保存した値が残る）
    pub fn capture(&self, value: T) {
        *self.captured.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
    }

    pub fn captured(&self) -> Option<T> {
        self.captured
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_captured(&self) -> bool {
        self.captured().is_some()
    }
}

/// モックを保持し、設定後にコンテナへ注入するフィクスチャ
pub struct InjectionFixture {
    pub injected: MockMultiplyByFive,
}

impl InjectionFixture {
    pub fn new() -> Self {
        Self {
            injected: MockMultiplyByFive::new(),
        }
    }

    /// 設定済みのモックをコンテナへ注入する
    pub fn into_container(self) -> Container<MockMultiplyByFive> {
        Container::with_injected(self.injected)
    }
}
