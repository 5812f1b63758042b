//! 加速作業カーネル
//!
//! 速度とインデックスの非線形関数でスクラッチバッファを埋め、
//! スカラーの作業量を積算する決定的ルーチン。
//! 最適化で消去されない程度の計算量を確保することが唯一の目的で、
//! 物理的な意味は持たない。

/// 1回の加速で生じる作業量を計算する
///
/// buffer は毎回全要素が上書きされるため、結果は呼び出し前の内容に依存しない。
/// 有限の speed に対して全域的で、エラー経路は持たない。
/// speed + i が負になる要素では sqrt が NaN を返し、そのまま作業量へ伝播する
/// （エラーではなく定義済みの縮退出力。非負の速度では発生しない）。
pub fn accelerate_work(speed: f64, buffer: &mut [f64]) -> f64 {
    let mut delta_work = 0.0;
    for (i, slot) in buffer.iter_mut().enumerate() {
        let index = i as f64;
        *slot = (speed * index).sin() * (index * 0.5).cos() * speed.tan();
        delta_work += *slot * (speed + index).sqrt();
    }
    delta_work
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_is_deterministic() {
        let mut first = vec![0.0; 256];
        let mut second = vec![0.0; 256];

        let work_first = accelerate_work(50.0, &mut first);
        let work_second = accelerate_work(50.0, &mut second);

        // 同じ速度と同じ長さのバッファならビット単位で一致する
        assert_eq!(work_first.to_bits(), work_second.to_bits());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_kernel_ignores_previous_buffer_contents() {
        let mut fresh = vec![0.0; 128];
        let mut dirty = vec![f64::MAX; 128];

        let work_fresh = accelerate_work(12.5, &mut fresh);
        let work_dirty = accelerate_work(12.5, &mut dirty);

        assert_eq!(work_fresh.to_bits(), work_dirty.to_bits());
        assert_eq!(fresh, dirty);
    }

    #[test]
    fn test_kernel_preserves_buffer_length() {
        let mut buffer = vec![0.0; 1000];
        accelerate_work(3.0, &mut buffer);

        assert_eq!(buffer.len(), 1000);
    }

    #[test]
    fn test_kernel_zero_speed() {
        let mut buffer = vec![1.0; 64];
        let work = accelerate_work(0.0, &mut buffer);

        // sin(0) = tan(0) = 0 なので全要素と作業量がゼロになる
        assert!((work - 0.0).abs() < f64::EPSILON);
        assert!(buffer.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_kernel_negative_speed_yields_nan() {
        // i = 0 で speed + i が負になり、sqrt が NaN を返す
        let mut buffer = vec![0.0; 16];
        let work = accelerate_work(-0.5, &mut buffer);

        assert!(work.is_nan());
    }

    #[test]
    fn test_kernel_default_workload_is_positive() {
        // 本計測と同じ条件（バッファ長10000、速度50.0）で
        // 有限かつ正の作業量が得られる
        let mut buffer = vec![0.0; 10_000];
        let work = accelerate_work(50.0, &mut buffer);

        assert!(work.is_finite());
        assert!(work > 0.0);
    }
}
