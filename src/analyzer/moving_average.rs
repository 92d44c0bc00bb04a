use crate::model::{MaRecord, PricePoint};

/// Rolling means over the trailing `bigger_window` and `smaller_window`
/// sessions plus their percentage difference, one record per session.
/// Every leading row is dropped until the bigger window is full, so the
/// output holds `len - bigger_window + 1` records, or none at all when the
/// series is too short. Callers treat an empty result as missing data.
pub fn build_records(
    series: &[PricePoint],
    bigger_window: usize,
    smaller_window: usize,
) -> Vec<MaRecord> {
    if bigger_window == 0 || smaller_window == 0 || series.len() < bigger_window {
        return Vec::new();
    }

    let closes: Vec<f64> = series.iter().map(|p| p.close).collect();
    let bigger = rolling_mean(&closes, bigger_window);
    let smaller = rolling_mean(&closes, smaller_window);

    // The smaller window fills earlier; index shift aligns both means on
    // the session they end at.
    let shift = bigger_window - smaller_window;

    series[bigger_window - 1..]
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let bigger_ma = bigger[i];
            let smaller_ma = smaller[i + shift];
            MaRecord {
                date: point.date,
                close: point.close,
                bigger_ma,
                smaller_ma,
                ma_difference: (smaller_ma - bigger_ma) / bigger_ma * 100.0,
            }
        })
        .collect()
}

fn rolling_mean(data: &[f64], window: usize) -> Vec<f64> {
    data.windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}
