//! ディスパッチ比較シナリオ
//!
//! 論理的に同一のワークロードを2つの経路で駆動する：
//! - ConceptScenario: ジェネリック境界による静的ディスパッチ
//! - PolymorphicScenario: トレイトオブジェクトによる動的ディスパッチ
//!
//! 各シナリオは電動・ガソリン各1台を所有し、計測1試行ごとに
//! 内側ループで加速・計測・制動を繰り返して作業量を積算する。
//! 外側の計測ループは外部の測定フレームワークが駆動する。

use std::sync::atomic::{compiler_fence, Ordering};
use std::time::Duration;

use crate::core::config::BenchConfig;
use crate::core::traits::{SportsCar, StatsReporter, Vehicle};
use crate::vehicle::{PolyVehicle, SportVehicle};

// 静的経路に参加する具象型の能力契約（コンパイル時検査）
crate::assert_sports_car!(SportVehicle);

/// 静的ディスパッチで1周分の加速・計測・制動を行う
///
/// 呼び出しは単相化され、実行時の分岐は発生しない
fn drive_lap<C: SportsCar>(car: &mut C, delta: f64) -> f64 {
    car.accelerate(delta);
    let work = car.work();
    car.brake();
    work
}

/// 静的ディスパッチ経路のシナリオ
pub struct ConceptScenario {
    electric: SportVehicle,
    gas: SportVehicle,
    config: BenchConfig,
    total_work: f64,
    trials: u64,
}

impl ConceptScenario {
    /// 電動・ガソリン各1台でシナリオを構築
    pub fn new(config: &BenchConfig) -> Self {
        Self {
            electric: SportVehicle::electric("Tesla", "Model S", config),
            gas: SportVehicle::gas("Porsche", "911", config),
            config: config.clone(),
            total_work: 0.0,
            trials: 0,
        }
    }

    /// 計測1試行分（内側ループ）を実行し、累計作業量を返す
    pub fn run_trial(&mut self) -> f64 {
        for _ in 0..self.config.inner_loop_count {
            self.total_work += drive_lap(&mut self.electric, self.config.acceleration_value);
            self.total_work += drive_lap(&mut self.gas, self.config.acceleration_value);
        }
        self.trials += 1;

        // 測定フレームワークによる計算の省略を防ぐ
        compiler_fence(Ordering::SeqCst);
        std::hint::black_box(self.total_work)
    }

    /// 累計作業量を取得
    pub fn total_work(&self) -> f64 {
        self.total_work
    }

    /// 実行済み試行回数を取得
    pub fn trials(&self) -> u64 {
        self.trials
    }
}

/// 動的ディスパッチ経路のシナリオ
pub struct PolymorphicScenario {
    vehicles: [Box<dyn Vehicle>; 2],
    config: BenchConfig,
    total_work: f64,
    trials: u64,
}

impl PolymorphicScenario {
    /// 電動・ガソリン各1台でシナリオを構築
    pub fn new(config: &BenchConfig) -> Self {
        Self {
            vehicles: [
                Box::new(PolyVehicle::electric(config)),
                Box::new(PolyVehicle::gas(config)),
            ],
            config: config.clone(),
            total_work: 0.0,
            trials: 0,
        }
    }

    /// 計測1試行分（内側ループ）を実行し、累計作業量を返す
    pub fn run_trial(&mut self) -> f64 {
        for _ in 0..self.config.inner_loop_count {
            for vehicle in self.vehicles.iter_mut() {
                // 全呼び出しが vtable を経由する
                vehicle.accelerate(self.config.acceleration_value);
                self.total_work += vehicle.work();
                vehicle.brake();
            }
        }
        self.trials += 1;

        compiler_fence(Ordering::SeqCst);
        std::hint::black_box(self.total_work)
    }

    /// 累計作業量を取得
    pub fn total_work(&self) -> f64 {
        self.total_work
    }

    /// 実行済み試行回数を取得
    pub fn trials(&self) -> u64 {
        self.trials
    }
}

/// 測定結果をフレームワークへ報告する
///
/// カウンター3種（試行回数・スループット・試行あたり平均作業量）と
/// 人間可読ラベルを設定する
pub fn report_stats<R: StatsReporter>(
    reporter: &mut R,
    iterations: u64,
    elapsed: Duration,
    total_work: f64,
) {
    let iters = iterations as f64;
    let avg = if iterations == 0 { 0.0 } else { total_work / iters };
    let secs = elapsed.as_secs_f64();
    let rate = if secs > 0.0 { iters / secs } else { 0.0 };

    reporter.set_counter("iterations", iters);
    reporter.set_counter("items_per_second", rate);
    reporter.set_counter("avg_work_per_iteration", avg);
    reporter.set_label(&format!(
        "Total accumulated work (from calculations): {total_work:.6} (avg per iter: {avg:.6})"
    ));
}
