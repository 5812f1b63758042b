use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use vehicle_bench::cli::{Cli, Commands};
use vehicle_bench::{BenchConfig, ConsoleStatsReporter, DispatchComparison};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            iterations,
            config,
            report,
            quiet,
        } => run_compare(iterations, config, report, quiet),
        Commands::InitConfig { output } => init_config(&output),
    }
}

fn run_compare(
    iterations: Option<u64>,
    config_path: Option<PathBuf>,
    report_path: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    println!("🚀 車両ワークロード ディスパッチ比較ツール");

    // 1. 設定の読み込み
    let mut config = match &config_path {
        Some(path) => BenchConfig::from_config_file(path)?,
        None => BenchConfig::default(),
    };
    if let Some(n) = iterations {
        config = config.with_iterations(n);
    }
    config.validate()?;

    println!("⚙️  設定:");
    println!("   - バッファ長: {}", config.vector_size);
    println!("   - 内側ループ回数: {}", config.inner_loop_count);
    println!("   - 加速値: {}", config.acceleration_value);
    println!("   - 計測試行回数: {}", config.benchmark_iterations);

    // 2. 両経路の計測実行
    let mut reporter = if quiet {
        ConsoleStatsReporter::quiet()
    } else {
        ConsoleStatsReporter::new()
    };
    let mut comparison = DispatchComparison::new(config);
    comparison.run_full_comparison(&mut reporter);

    // 3. レポート出力（指定時のみ）
    if let Some(path) = report_path {
        comparison.export_json_report(&path)?;
    }

    Ok(())
}

fn init_config(output: &PathBuf) -> Result<()> {
    let config = BenchConfig::default();
    config.write_config_file(output)?;
    println!("📄 設定ファイルを出力しました: {}", output.display());
    Ok(())
}
