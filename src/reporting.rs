// 測定結果報告の具象実装

use crate::core::traits::StatsReporter;
use std::collections::HashMap;

/// コンソール出力による報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleStatsReporter {
    quiet: bool,
}

impl ConsoleStatsReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl StatsReporter for ConsoleStatsReporter {
    fn set_counter(&mut self, name: &str, value: f64) {
        if !self.quiet {
            println!("  📊 {name}: {value:.6}");
        }
    }

    fn set_label(&mut self, label: &str) {
        if !self.quiet {
            println!("  🏷️  {label}");
        }
    }
}

/// メモリ上に結果を保持する報告実装（テスト・スイート用）
#[derive(Debug, Default, Clone)]
pub struct MemoryStatsReporter {
    counters: HashMap<String, f64>,
    label: Option<String>,
}

impl MemoryStatsReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 名前付きカウンターの値を取得
    pub fn counter(&self, name: &str) -> Option<f64> {
        self.counters.get(name).copied()
    }

    /// 保持している全カウンターを取得
    pub fn counters(&self) -> &HashMap<String, f64> {
        &self.counters
    }

    /// 最後に設定されたラベルを取得
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl StatsReporter for MemoryStatsReporter {
    fn set_counter(&mut self, name: &str, value: f64) {
        self.counters.insert(name.to_string(), value);
    }

    fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }
}
