use crate::model::{FetchRequest, PricePoint, SourceError};
use crate::source::traits::PriceSource;
use chrono::{DateTime, NaiveTime};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

/// Daily close quotes from the Yahoo Finance chart API.
pub struct YahooSource {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Vec<Option<f64>>,
}

impl YahooSource {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) DipSniperBot/0.1")
            .build()
            .unwrap();

        Self {
            client,
            base_url: "https://query1.finance.yahoo.com".to_string(),
        }
    }

    fn build_url(&self, req: &FetchRequest) -> String {
        // The end date is exclusive, the provider's own convention.
        let period1 = req.start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let period2 = req.end.and_time(NaiveTime::MIN).and_utc().timestamp();
        format!(
            "{}/v8/finance/chart/{}?interval=1d&period1={}&period2={}",
            self.base_url, req.symbol, period1, period2
        )
    }
}

impl Default for YahooSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PriceSource for YahooSource {
    async fn fetch(&self, req: &FetchRequest) -> Result<Vec<PricePoint>, SourceError> {
        let url = self.build_url(req);
        info!("Requesting {} quotes...", req.symbol);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::InvalidResponse(format!(
                "provider responded with status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let series = parse_chart(&body, &req.symbol)?;
        info!("Fetched {} sessions for {}", series.len(), req.symbol);
        Ok(series)
    }
}

/// Turns a chart API payload into an ascending, deduplicated close series.
/// Sessions the provider reports without a close are skipped.
fn parse_chart(body: &str, symbol: &str) -> Result<Vec<PricePoint>, SourceError> {
    let response: ChartResponse =
        serde_json::from_str(body).map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

    if let Some(error) = response.chart.error {
        return Err(SourceError::InvalidResponse(format!(
            "{}: {}",
            error.code, error.description
        )));
    }

    let result = response
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| SourceError::NoData(symbol.to_string()))?;

    let timestamps = result
        .timestamp
        .ok_or_else(|| SourceError::NoData(symbol.to_string()))?;

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| SourceError::NoData(symbol.to_string()))?;

    let mut series = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let close = quote.close.get(i).and_then(|c| *c);
        let date = DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive());
        if let (Some(close), Some(date)) = (close, date) {
            if close > 0.0 {
                series.push(PricePoint { date, close });
            }
        }
    }

    if series.is_empty() {
        return Err(SourceError::NoData(symbol.to_string()));
    }

    series.sort_by(|a, b| a.date.cmp(&b.date));
    series.dedup_by(|a, b| a.date == b.date);

    Ok(series)
}
