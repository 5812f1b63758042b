//! 設定ファイル入出力の統合テスト

use tempfile::TempDir;
use vehicle_bench::BenchConfig;

#[test]
fn test_write_and_reload_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bench_config.json");

    let config = BenchConfig::default()
        .with_iterations(2_000)
        .with_vector_size(512);
    config.write_config_file(&config_path).unwrap();

    let loaded = BenchConfig::from_config_file(&config_path).unwrap();
    assert_eq!(config, loaded);
}

#[test]
fn test_malformed_config_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.json");
    std::fs::write(&config_path, "{ not json").unwrap();

    let result = BenchConfig::from_config_file(&config_path);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("設定ファイルエラー"));
}

#[test]
fn test_invalid_values_in_config_file_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("zero.json");

    // バッファ長0はファイル経由でもバリデーションで拒否される
    let invalid = BenchConfig::default().with_vector_size(0);
    let json = serde_json::to_string_pretty(&invalid).unwrap();
    std::fs::write(&config_path, json).unwrap();

    let result = BenchConfig::from_config_file(&config_path);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("vector_size"));
}
