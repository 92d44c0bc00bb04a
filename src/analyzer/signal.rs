use crate::model::{ConfidenceBand, Indication};

/// Classifies the current difference against each band, in band order.
/// Boundary values count as Buy/Sell, not Hold.
pub fn classify(current_difference: f64, bands: &[ConfidenceBand]) -> Vec<Indication> {
    bands
        .iter()
        .map(|band| {
            if current_difference <= band.lower_bound {
                Indication::Buy
            } else if current_difference >= band.upper_bound {
                Indication::Sell
            } else {
                Indication::Hold
            }
        })
        .collect()
}
