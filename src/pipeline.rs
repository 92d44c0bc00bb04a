use crate::analyzer::{moving_average, signal, threshold};
use crate::config::AppConfig;
use crate::model::{FetchRequest, SignalError, SignalResult};
use crate::source::PriceSource;
use chrono::Utc;
use tracing::info;

/// Runs one signal computation: fetch, rolling averages, threshold fit,
/// classification. Fails fast on the first component failure, no retries.
pub struct SignalPipeline<S: PriceSource> {
    source: S,
    config: AppConfig,
}

impl<S: PriceSource> SignalPipeline<S> {
    pub fn new(source: S, config: AppConfig) -> Self {
        Self { source, config }
    }

    pub async fn compute_signal(
        &self,
        long_window: usize,
        short_window: usize,
    ) -> Result<SignalResult, SignalError> {
        validate_windows(long_window, short_window)?;

        let request = FetchRequest {
            symbol: self.config.symbol.clone(),
            start: self.config.start_date,
            end: self
                .config
                .end_date
                .unwrap_or_else(|| Utc::now().date_naive()),
        };

        info!(
            "Fetching {} from {} to {}...",
            request.symbol, request.start, request.end
        );
        let series = self.source.fetch(&request).await?;

        if series.len() < long_window {
            return Err(SignalError::InsufficientData(format!(
                "{} sessions fetched, at least {} needed for the long window",
                series.len(),
                long_window
            )));
        }

        let records = moving_average::build_records(&series, long_window, short_window);
        let latest = records.last().ok_or_else(|| {
            SignalError::InsufficientData("no sessions left after trimming".to_string())
        })?;
        info!(
            "Built {} records, latest difference {:.2}% on {}",
            records.len(),
            latest.ma_difference,
            latest.date
        );

        let differences: Vec<f64> = records.iter().map(|r| r.ma_difference).collect();
        let bands = threshold::estimate_bands(&differences, &threshold::CONFIDENCE_LEVELS)?;
        let indications = signal::classify(latest.ma_difference, &bands);

        Ok(SignalResult {
            as_of_date: latest.date,
            current_difference: latest.ma_difference,
            bands,
            indications,
        })
    }
}

/// Window inputs are checked before any fetch happens.
pub fn validate_windows(long_window: usize, short_window: usize) -> Result<(), SignalError> {
    if long_window == 0 || short_window == 0 {
        return Err(SignalError::InvalidInput(
            "moving-average windows must be positive".to_string(),
        ));
    }
    if short_window >= long_window {
        return Err(SignalError::InvalidInput(format!(
            "short-term window ({short_window}) must be smaller than long-term window ({long_window})"
        )));
    }
    Ok(())
}
