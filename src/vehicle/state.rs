// 車両の内部状態
// 両ディスパッチ経路が同じ基盤データの上に成り立つ

use crate::kernel::accelerate_work;

/// 速度・蓄積作業量・スクラッチバッファを持つ車両状態
///
/// バッファ長は生成時に確定し、車両の生存期間中は一定。
/// 所有する車両以外から参照・変更されることはない。
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    pub(crate) speed: f64,
    pub(crate) work: f64,
    pub(crate) calculations: Vec<f64>,
}

impl VehicleState {
    /// 停止状態の車両状態を作成
    pub(crate) fn new(vector_size: usize) -> Self {
        Self {
            speed: 0.0,
            work: 0.0,
            calculations: vec![0.0; vector_size],
        }
    }

    /// 現在速度でカーネルを実行し、作業量を蓄積する
    pub(crate) fn apply_acceleration(&mut self) {
        self.work += accelerate_work(self.speed, &mut self.calculations);
    }
}
