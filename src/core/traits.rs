// ディスパッチ比較の抽象化インターフェース定義
// 静的経路はトレイト境界で、動的経路はトレイトオブジェクトで呼び出しを解決する

use mockall::automock;

/// 加速操作の能力セット（静的ディスパッチ経路用）
///
/// ジェネリック境界として使い、呼び出しはコンパイル時に単相化される。
/// この経路に共通基底型は存在しない。
pub trait Acceleratable {
    /// 速度を delta だけ引き上げ、作業量を蓄積する
    fn accelerate(&mut self, delta: f64);

    /// 速度をリセットする
    fn brake(&mut self);

    /// 蓄積済み作業量を取得
    fn work(&self) -> f64;
}

/// スポーツカーとしての能力セット
///
/// Acceleratable に加えてブランド情報の提供を要求する
pub trait SportsCar: Acceleratable {
    /// ブランド名を取得
    fn brand(&self) -> &str;

    /// モデル名を取得
    fn model(&self) -> &str;
}

/// 動的ディスパッチ経路の抽象基底トレイト
///
/// 経路に参加する全車種が共有する vtable 境界。
/// 摩擦係数とブレーキ方式は実装側が供給する。
pub trait Vehicle {
    /// 摩擦係数を適用した上で速度を引き上げ、作業量を蓄積する
    fn accelerate(&mut self, delta: f64);

    /// ブレーキ方式に従って停止する
    fn brake(&mut self);

    /// 現在速度を取得
    fn current_speed(&self) -> f64;

    /// 摩擦係数を取得
    fn friction(&self) -> f64;

    /// 蓄積済み作業量を取得
    fn work(&self) -> f64;
}

// Vehicle for Box<dyn Vehicle>
impl Vehicle for Box<dyn Vehicle> {
    fn accelerate(&mut self, delta: f64) {
        self.as_mut().accelerate(delta)
    }

    fn brake(&mut self) {
        self.as_mut().brake()
    }

    fn current_speed(&self) -> f64 {
        self.as_ref().current_speed()
    }

    fn friction(&self) -> f64 {
        self.as_ref().friction()
    }

    fn work(&self) -> f64 {
        self.as_ref().work()
    }
}

/// 測定フレームワークへの報告インターフェース
#[automock]
pub trait StatsReporter {
    /// 名前付きカウンターを設定
    fn set_counter(&mut self, name: &str, value: f64);

    /// 人間可読ラベルを設定
    fn set_label(&mut self, label: &str);
}

/// 静的経路の能力契約をコンパイル時に検査するマクロ
///
/// 指定した具象型が SportsCar を満たさない場合はコンパイルエラーになる。
/// 実行時の検査経路は存在しない。
#[macro_export]
macro_rules! assert_sports_car {
    ($vehicle:ty) => {
        const _: fn() = {
            fn requires_sports_car<C: $crate::core::SportsCar>() {}
            requires_sports_car::<$vehicle>
        };
    };
}
