// Core structs: PricePoint, MaRecord, ConfidenceBand, SignalResult
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// One row of the moving-average table. Rows before the bigger window is
/// full are trimmed by the engine, so both averages are always present.
#[derive(Debug, Clone)]
pub struct MaRecord {
    pub date: NaiveDate,
    pub close: f64,
    pub bigger_ma: f64,
    pub smaller_ma: f64,
    /// Percentage deviation of the smaller average from the bigger one.
    /// Negative when the shorter average trails the longer one.
    pub ma_difference: f64,
}

#[derive(Debug, Clone)]
pub struct ConfidenceBand {
    pub confidence_level: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indication {
    Buy,
    Hold,
    Sell,
}

impl std::fmt::Display for Indication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Indication::Buy => write!(f, "Buy"),
            Indication::Hold => write!(f, "Hold"),
            Indication::Sell => write!(f, "Sell"),
        }
    }
}

/// Final artifact of one pipeline run. `bands` and `indications` are
/// parallel, one entry per confidence level, widest band first.
#[derive(Debug, Clone)]
pub struct SignalResult {
    pub as_of_date: NaiveDate,
    pub current_difference: f64,
    pub bands: Vec<ConfidenceBand>,
    pub indications: Vec<Indication>,
}

#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to price provider failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("price provider returned an invalid response: {0}")]
    InvalidResponse(String),
    #[error("price provider returned no quotes for {0}")]
    NoData(String),
}

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("price data unavailable: {0}")]
    DataUnavailable(#[from] SourceError),
    #[error("insufficient data: {0}")]
    InsufficientData(String),
}
