use crate::model::{ConfidenceBand, SignalError};
use statrs::distribution::{ContinuousCDF, Normal};

/// Fixed confidence levels, widest band first.
pub const CONFIDENCE_LEVELS: [f64; 3] = [0.95, 0.90, 0.80];

/// Maximum-likelihood normal fit over the difference observations: sample
/// mean and population standard deviation (no Bessel correction).
pub fn fit_normal(observations: &[f64]) -> Result<(f64, f64), SignalError> {
    if observations.len() < 2 {
        return Err(SignalError::InsufficientData(format!(
            "need at least 2 difference observations, got {}",
            observations.len()
        )));
    }

    let n = observations.len() as f64;
    let mean = observations.iter().sum::<f64>() / n;
    let variance = observations.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if std_dev <= 0.0 || !std_dev.is_finite() {
        return Err(SignalError::InsufficientData(
            "difference series has zero variance, distribution fit is degenerate".to_string(),
        ));
    }

    Ok((mean, std_dev))
}

/// Two-sided interval bounds under the fitted normal, one band per
/// requested level, in the same order as the input levels.
pub fn estimate_bands(
    observations: &[f64],
    levels: &[f64],
) -> Result<Vec<ConfidenceBand>, SignalError> {
    let (mean, std_dev) = fit_normal(observations)?;
    let normal = Normal::new(mean, std_dev)
        .map_err(|e| SignalError::InsufficientData(e.to_string()))?;

    Ok(levels
        .iter()
        .map(|&confidence_level| ConfidenceBand {
            confidence_level,
            lower_bound: normal.inverse_cdf((1.0 - confidence_level) / 2.0),
            upper_bound: normal.inverse_cdf((1.0 + confidence_level) / 2.0),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_uses_population_std() {
        let (mean, std_dev) = fit_normal(&[2.0, 4.0]).unwrap();
        assert!((mean - 3.0).abs() < 1e-12);
        // Population convention: sqrt(((2-3)^2 + (4-3)^2) / 2) = 1, not sqrt(2).
        assert!((std_dev - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bands_match_known_z_scores() {
        // Mean 0, population std 1.
        let bands = estimate_bands(&[-1.0, 1.0], &CONFIDENCE_LEVELS).unwrap();
        assert!((bands[0].lower_bound + 1.959964).abs() < 1e-4);
        assert!((bands[0].upper_bound - 1.959964).abs() < 1e-4);
        assert!((bands[1].upper_bound - 1.644854).abs() < 1e-4);
        assert!((bands[2].upper_bound - 1.281552).abs() < 1e-4);
    }

    #[test]
    fn test_bands_ordered_and_nested() {
        let observations: Vec<f64> = (0..100).map(|i| (i as f64 * 0.3).sin() * 4.0 - 1.0).collect();
        let bands = estimate_bands(&observations, &CONFIDENCE_LEVELS).unwrap();
        assert_eq!(bands.len(), 3);

        for band in &bands {
            assert!(band.lower_bound < band.upper_bound);
        }
        // 95% band contains the 90% band, which contains the 80% band.
        for pair in bands.windows(2) {
            assert!(pair[0].lower_bound < pair[1].lower_bound);
            assert!(pair[0].upper_bound > pair[1].upper_bound);
        }
    }

    #[test]
    fn test_bands_centered_on_mean() {
        let observations = [4.0, 6.0, 8.0, 10.0];
        let (mean, _) = fit_normal(&observations).unwrap();
        let bands = estimate_bands(&observations, &CONFIDENCE_LEVELS).unwrap();
        for band in &bands {
            let center = (band.lower_bound + band.upper_bound) / 2.0;
            assert!((center - mean).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_variance_is_rejected() {
        let err = estimate_bands(&[0.0; 30], &CONFIDENCE_LEVELS).unwrap_err();
        assert!(matches!(err, SignalError::InsufficientData(_)));
    }

    #[test]
    fn test_too_few_observations_rejected() {
        let err = fit_normal(&[1.5]).unwrap_err();
        assert!(matches!(err, SignalError::InsufficientData(_)));
        assert!(fit_normal(&[]).is_err());
    }
}
