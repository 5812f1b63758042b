//! パフォーマンス測定とベンチマークモジュール
//!
//! 静的ディスパッチと動的ディスパッチの性能比較を提供

pub mod dispatch_comparison;

pub use dispatch_comparison::{ComparisonMetrics, DispatchComparison};
