//! 動的ディスパッチ経路向けの車両実装
//!
//! Vehicle トレイトを vtable 境界として共有する。
//! 旧来の電動・ガソリン2クラスは、摩擦係数とブレーキ方式を
//! 生成時に受け取る単一型に集約した。
//! この経路の accelerate は入力へ摩擦係数を適用する
//! （静的経路との既知の非対称。テストで現行挙動を固定している）。

use crate::core::config::BenchConfig;
use crate::core::traits::Vehicle;
use crate::core::types::BrakingPolicy;

use super::state::VehicleState;

/// 動的ディスパッチ経路用の車両
#[derive(Debug, Clone)]
pub struct PolyVehicle {
    state: VehicleState,
    friction: f64,
    braking: BrakingPolicy,
}

impl PolyVehicle {
    /// 新しい車両を作成
    pub fn new(friction: f64, braking: BrakingPolicy, config: &BenchConfig) -> Self {
        Self {
            state: VehicleState::new(config.vector_size),
            friction,
            braking,
        }
    }

    /// 回生ブレーキ付きの電動車を作成
    pub fn electric(config: &BenchConfig) -> Self {
        Self::new(
            config.electric_poly_friction,
            BrakingPolicy::Regenerative,
            config,
        )
    }

    /// 通常ブレーキのガソリン車を作成
    pub fn gas(config: &BenchConfig) -> Self {
        Self::new(config.gas_poly_friction, BrakingPolicy::Standard, config)
    }

    /// ブレーキ方式を取得（生成後は不変）
    pub fn braking(&self) -> BrakingPolicy {
        self.braking
    }
}

impl Vehicle for PolyVehicle {
    fn accelerate(&mut self, delta: f64) {
        // 入力側に摩擦係数を適用する
        self.state.speed += delta * self.friction;
        self.state.apply_acceleration();
    }

    fn brake(&mut self) {
        match self.braking {
            // 回生ブレーキ: 運動エネルギーの一部を作業量へ還元してから停止
            BrakingPolicy::Regenerative => {
                self.state.work += self.state.speed * self.friction;
                self.state.speed = 0.0;
            }
            // 通常ブレーキ: 停止のみ
            BrakingPolicy::Standard => {
                self.state.speed = 0.0;
            }
        }
    }

    fn current_speed(&self) -> f64 {
        self.state.speed
    }

    fn friction(&self) -> f64 {
        self.friction
    }

    fn work(&self) -> f64 {
        self.state.work
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::accelerate_work;

    fn config() -> BenchConfig {
        BenchConfig::quick()
    }

    #[test]
    fn test_poly_vehicle_creation() {
        let config = config();
        let electric = PolyVehicle::electric(&config);
        let gas = PolyVehicle::gas(&config);

        assert!((electric.friction() - 0.85).abs() < f64::EPSILON);
        assert_eq!(electric.braking(), BrakingPolicy::Regenerative);

        assert!((gas.friction() - 0.95).abs() < f64::EPSILON);
        assert_eq!(gas.braking(), BrakingPolicy::Standard);
    }

    #[test]
    fn test_accelerate_applies_friction_to_input() {
        let config = config();
        let mut vehicle = PolyVehicle::electric(&config);
        vehicle.accelerate(5.0);

        // 速度は delta×摩擦係数になり、カーネルもその速度で実行される
        let expected_speed = 5.0 * config.electric_poly_friction;
        assert_eq!(vehicle.current_speed().to_bits(), expected_speed.to_bits());

        let mut reference = vec![0.0; config.vector_size];
        let expected_work = accelerate_work(expected_speed, &mut reference);
        assert_eq!(vehicle.work().to_bits(), expected_work.to_bits());
    }

    #[test]
    fn test_regenerative_brake_recovers_work() {
        let config = config();
        let mut vehicle = PolyVehicle::electric(&config);
        vehicle.accelerate(5.0);

        let speed_before = vehicle.current_speed();
        let work_before = vehicle.work();
        vehicle.brake();

        // 速度×摩擦係数の分だけ作業量が厳密に増える
        let expected = work_before + speed_before * config.electric_poly_friction;
        assert_eq!(vehicle.work().to_bits(), expected.to_bits());
        assert!(vehicle.work() > work_before);
        assert!((vehicle.current_speed() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_standard_brake_recovers_nothing() {
        let config = config();
        let mut vehicle = PolyVehicle::gas(&config);
        vehicle.accelerate(5.0);

        let work_before = vehicle.work();
        vehicle.brake();

        assert_eq!(vehicle.work().to_bits(), work_before.to_bits());
        assert!((vehicle.current_speed() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let config = config();
        let mut vehicles: Vec<Box<dyn Vehicle>> = vec![
            Box::new(PolyVehicle::electric(&config)),
            Box::new(PolyVehicle::gas(&config)),
        ];

        for vehicle in vehicles.iter_mut() {
            vehicle.accelerate(5.0);
            vehicle.brake();
        }

        // トレイトオブジェクト経由でも具象型と同じ挙動になる
        let mut electric = PolyVehicle::electric(&config);
        electric.accelerate(5.0);
        electric.brake();

        assert_eq!(vehicles[0].work().to_bits(), electric.work().to_bits());
        assert!((vehicles[0].current_speed() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_identical_sequences_are_bitwise_equal() {
        let config = config();
        let mut first = PolyVehicle::electric(&config);
        let mut second = PolyVehicle::electric(&config);

        for _ in 0..4 {
            first.accelerate(5.0);
            first.brake();
            second.accelerate(5.0);
            second.brake();
        }

        assert_eq!(first.work().to_bits(), second.work().to_bits());
    }
}
