//! 静的ディスパッチ経路向けの車両実装
//!
//! 共通基底型を持たず、能力セット（Acceleratable / SportsCar）への
//! 適合だけで経路に参加する。摩擦係数は変種ごとの定数として保持するが、
//! この経路の accelerate は入力へ適用しない（動的経路との既知の非対称。
//! 意図的な修正はせず、テストで現行挙動を固定している）。

use crate::core::config::BenchConfig;
use crate::core::traits::{Acceleratable, SportsCar};

use super::state::VehicleState;

/// スポーツカー（静的ディスパッチ経路用の単一型）
///
/// 電動・ガソリンの変種は摩擦係数とブランド情報の違いだけなので、
/// 生成時のパラメータで表現する
#[derive(Debug, Clone)]
pub struct SportVehicle {
    state: VehicleState,
    friction: f64,
    brand: String,
    model: String,
}

impl SportVehicle {
    /// 新しいスポーツカーを作成
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        friction: f64,
        config: &BenchConfig,
    ) -> Self {
        Self {
            state: VehicleState::new(config.vector_size),
            friction,
            brand: brand.into(),
            model: model.into(),
        }
    }

    /// 電動スポーツカーを作成
    pub fn electric(
        brand: impl Into<String>,
        model: impl Into<String>,
        config: &BenchConfig,
    ) -> Self {
        Self::new(brand, model, config.electric_sport_friction, config)
    }

    /// ガソリンスポーツカーを作成
    pub fn gas(brand: impl Into<String>, model: impl Into<String>, config: &BenchConfig) -> Self {
        Self::new(brand, model, config.gas_sport_friction, config)
    }

    /// 保持している摩擦係数を取得（生成後は不変）
    pub fn friction(&self) -> f64 {
        self.friction
    }
}

impl Acceleratable for SportVehicle {
    fn accelerate(&mut self, delta: f64) {
        // この経路では摩擦係数を入力へ適用しない
        self.state.speed += delta;
        self.state.apply_acceleration();
    }

    fn brake(&mut self) {
        self.state.speed = 0.0;
    }

    fn work(&self) -> f64 {
        self.state.work
    }
}

impl SportsCar for SportVehicle {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn model(&self) -> &str {
        &self.model
    }
}
