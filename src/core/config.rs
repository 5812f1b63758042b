//! 測定設定
//!
//! 旧来のグローバル定数群を一つの不変設定構造体に集約し、
//! カーネル利用側と比較シナリオへ生成時に明示的に渡す：
//! - BenchConfig: 測定パラメータと車種ごとの摩擦係数
//! - プリセット: default（本計測用）/ quick（テスト用軽量設定）
//! - JSONファイルからの読み込みと書き出し

use super::error::{BenchError, BenchResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ベンチマーク設定
///
/// 生成後は変更しない前提で、各コンポーネントには参照で渡す
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// スクラッチバッファの要素数（車両の生存期間中は一定）
    pub vector_size: usize,
    /// 計測1試行あたりの内側ループ回数
    pub inner_loop_count: usize,
    /// 1回の加速で与える速度増分
    pub acceleration_value: f64,
    /// 計測試行の回数
    pub benchmark_iterations: u64,
    /// 測定フレームワークに指示する最小計測時間（秒）
    pub min_time: f64,
    /// 電動スポーツカーの摩擦係数（静的経路では保持のみ）
    pub electric_sport_friction: f64,
    /// ガソリンスポーツカーの摩擦係数（静的経路では保持のみ）
    pub gas_sport_friction: f64,
    /// 電動車（動的経路）の摩擦係数
    pub electric_poly_friction: f64,
    /// ガソリン車（動的経路）の摩擦係数
    pub gas_poly_friction: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            vector_size: 10_000,
            inner_loop_count: 10,
            acceleration_value: 50.0,
            benchmark_iterations: 10_000,
            min_time: 0.1,
            electric_sport_friction: 0.95,
            gas_sport_friction: 0.75,
            electric_poly_friction: 0.85,
            gas_poly_friction: 0.95,
        }
    }
}

impl BenchConfig {
    /// テスト用軽量設定を生成
    ///
    /// バッファ長と試行回数を抑え、単体テストを高速に保つ
    pub fn quick() -> Self {
        Self {
            vector_size: 64,
            inner_loop_count: 4,
            acceleration_value: 5.0,
            benchmark_iterations: 100,
            min_time: 0.05,
            ..Self::default()
        }
    }

    pub fn with_vector_size(mut self, vector_size: usize) -> Self {
        self.vector_size = vector_size;
        self
    }

    pub fn with_inner_loop_count(mut self, inner_loop_count: usize) -> Self {
        self.inner_loop_count = inner_loop_count;
        self
    }

    pub fn with_acceleration_value(mut self, acceleration_value: f64) -> Self {
        self.acceleration_value = acceleration_value;
        self
    }

    pub fn with_iterations(mut self, benchmark_iterations: u64) -> Self {
        self.benchmark_iterations = benchmark_iterations;
        self
    }

    pub fn with_min_time(mut self, min_time: f64) -> Self {
        self.min_time = min_time;
        self
    }

    /// 設定をバリデーション
    pub fn validate(&self) -> BenchResult<()> {
        if self.vector_size == 0 {
            return Err(BenchError::validation(
                "vector_size",
                "値は1以上である必要があります",
            ));
        }
        if self.inner_loop_count == 0 {
            return Err(BenchError::validation(
                "inner_loop_count",
                "値は1以上である必要があります",
            ));
        }
        if self.benchmark_iterations == 0 {
            return Err(BenchError::validation(
                "benchmark_iterations",
                "値は1以上である必要があります",
            ));
        }
        if !self.acceleration_value.is_finite() {
            return Err(BenchError::validation(
                "acceleration_value",
                "有限の値である必要があります",
            ));
        }
        if !(self.min_time.is_finite() && self.min_time > 0.0) {
            return Err(BenchError::validation(
                "min_time",
                "正の有限値である必要があります",
            ));
        }
        for (field, friction) in [
            ("electric_sport_friction", self.electric_sport_friction),
            ("gas_sport_friction", self.gas_sport_friction),
            ("electric_poly_friction", self.electric_poly_friction),
            ("gas_poly_friction", self.gas_poly_friction),
        ] {
            if !(friction.is_finite() && friction > 0.0) {
                return Err(BenchError::validation(
                    field,
                    "正の有限値である必要があります",
                ));
            }
        }
        Ok(())
    }

    /// 設定ファイル（JSON）から読み込み
    pub fn from_config_file(path: &Path) -> BenchResult<Self> {
        let config_str = std::fs::read_to_string(path).map_err(|e| {
            BenchError::config_file(
                path.display().to_string(),
                anyhow::anyhow!("読み込みエラー: {e}"),
            )
        })?;

        let config: Self = serde_json::from_str(&config_str).map_err(|e| {
            BenchError::config_file(
                path.display().to_string(),
                anyhow::anyhow!("解析エラー: {e}"),
            )
        })?;

        // 読み込んだ設定をバリデーション
        config.validate()?;

        Ok(config)
    }

    /// 設定ファイル（JSON）へ書き出し
    pub fn write_config_file(&self, path: &Path) -> BenchResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            BenchError::config_file(
                path.display().to_string(),
                anyhow::anyhow!("シリアライズエラー: {e}"),
            )
        })?;

        std::fs::write(path, json).map_err(|e| {
            BenchError::config_file(
                path.display().to_string(),
                anyhow::anyhow!("書き込みエラー: {e}"),
            )
        })?;

        Ok(())
    }
}
