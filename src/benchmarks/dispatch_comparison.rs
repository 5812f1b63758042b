//! ディスパッチ経路のパフォーマンス測定
//!
//! criterion を介さない自前計時版。両シナリオを同一設定で回し、
//! サマリー表示と JSON レポート出力を提供する

use crate::comparator::{report_stats, ConceptScenario, PolymorphicScenario};
use crate::core::{BenchConfig, BenchError, BenchResult, DispatchMode, ScenarioReport, StatsReporter};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// 1経路分の計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    pub report: ScenarioReport,
    pub elapsed: Duration,
}

/// ディスパッチ比較スイート
pub struct DispatchComparison {
    config: BenchConfig,
    results: Vec<ComparisonMetrics>,
}

impl DispatchComparison {
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config,
            results: Vec::new(),
        }
    }

    /// 使用中の設定を取得
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// これまでの計測結果を取得
    pub fn results(&self) -> &[ComparisonMetrics] {
        &self.results
    }

    /// 静的ディスパッチ経路の計測
    pub fn benchmark_concept_based<R: StatsReporter>(&mut self, iterations: u64, reporter: &mut R) {
        println!("🔬 静的ディスパッチ計測 ({iterations} iterations)");

        let mut scenario = ConceptScenario::new(&self.config);
        let start = Instant::now();
        for _ in 0..iterations {
            scenario.run_trial();
        }
        let elapsed = start.elapsed();

        report_stats(reporter, scenario.trials(), elapsed, scenario.total_work());
        println!("  🟢 ConceptBased: {elapsed:?}");

        self.results.push(ComparisonMetrics {
            report: ScenarioReport::new(
                "ConceptBased",
                DispatchMode::Static,
                scenario.trials(),
                scenario.total_work(),
            ),
            elapsed,
        });
    }

    /// 動的ディスパッチ経路の計測
    pub fn benchmark_polymorphic<R: StatsReporter>(&mut self, iterations: u64, reporter: &mut R) {
        println!("🔬 動的ディスパッチ計測 ({iterations} iterations)");

        let mut scenario = PolymorphicScenario::new(&self.config);
        let start = Instant::now();
        for _ in 0..iterations {
            scenario.run_trial();
        }
        let elapsed = start.elapsed();

        report_stats(reporter, scenario.trials(), elapsed, scenario.total_work());
        println!("  🔴 Polymorphic: {elapsed:?}");

        self.results.push(ComparisonMetrics {
            report: ScenarioReport::new(
                "Polymorphic",
                DispatchMode::Dynamic,
                scenario.trials(),
                scenario.total_work(),
            ),
            elapsed,
        });
    }

    /// 両経路の比較を一括実行
    pub fn run_full_comparison<R: StatsReporter>(&mut self, reporter: &mut R) {
        println!("🚀 ディスパッチ経路比較");
        println!("{}", "=".repeat(60));

        let iterations = self.config.benchmark_iterations;
        self.benchmark_concept_based(iterations, reporter);
        println!();

        self.benchmark_polymorphic(iterations, reporter);
        println!();

        self.print_summary();
    }

    /// 結果サマリーの表示
    pub fn print_summary(&self) {
        println!("📊 ディスパッチ比較サマリー");
        println!("{}", "=".repeat(60));

        for metrics in &self.results {
            println!(
                "🎯 {} ({})",
                metrics.report.scenario_name,
                metrics.report.dispatch_mode.as_str()
            );
            println!("   - 試行回数: {}", metrics.report.iterations);
            println!("   - 所要時間: {:?}", metrics.elapsed);
            println!("   - 累計作業量: {:.6}", metrics.report.total_work);
            println!(
                "   - 平均作業量/試行: {:.6}",
                metrics.report.avg_work_per_iteration
            );
            println!();
        }

        if let Some(fastest) = self.fastest() {
            println!(
                "🏆 最速経路: {} ({:?})",
                fastest.report.scenario_name, fastest.elapsed
            );
        }
    }

    /// 最速だった経路の結果を取得
    pub fn fastest(&self) -> Option<&ComparisonMetrics> {
        self.results.iter().min_by_key(|m| m.elapsed)
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &std::path::Path) -> BenchResult<()> {
        let report = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "config": self.config,
            "results": self.results,
        });

        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            BenchError::report_export(
                path.display().to_string(),
                anyhow::anyhow!("シリアライズエラー: {e}"),
            )
        })?;

        std::fs::write(path, json).map_err(|e| {
            BenchError::report_export(
                path.display().to_string(),
                anyhow::anyhow!("書き込みエラー: {e}"),
            )
        })?;

        println!("📄 詳細レポートを出力しました: {}", path.display());
        Ok(())
    }
}
