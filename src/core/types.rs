// 測定に関連するデータ型定義

use serde::{Deserialize, Serialize};

/// ディスパッチ経路の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchMode {
    /// 静的ディスパッチ（ジェネリック境界、コンパイル時解決）
    Static,
    /// 動的ディスパッチ（トレイトオブジェクト、実行時解決）
    Dynamic,
}

impl DispatchMode {
    /// 経路種別の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::Dynamic => "Dynamic",
        }
    }
}

/// ブレーキ方式
///
/// 生成時に確定し、以後変更されない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrakingPolicy {
    /// 回生ブレーキ: 停止時に速度×摩擦係数を作業量へ還元
    Regenerative,
    /// 通常ブレーキ: 停止のみ、エネルギー回収なし
    Standard,
}

/// 1シナリオ分の測定サマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario_name: String,
    pub dispatch_mode: DispatchMode,
    pub iterations: u64,
    pub total_work: f64,
    pub avg_work_per_iteration: f64,
}

impl ScenarioReport {
    /// 新しいサマリーを作成
    ///
    /// 平均作業量は合計と試行回数から導出する
    pub fn new(
        scenario_name: impl Into<String>,
        dispatch_mode: DispatchMode,
        iterations: u64,
        total_work: f64,
    ) -> Self {
        let avg_work_per_iteration = if iterations == 0 {
            0.0
        } else {
            total_work / iterations as f64
        };

        Self {
            scenario_name: scenario_name.into(),
            dispatch_mode,
            iterations,
            total_work,
            avg_work_per_iteration,
        }
    }
}
