// Price source module: trait seam plus the Yahoo Finance implementation.

pub mod traits;
pub mod yahoo;

pub use traits::PriceSource;
pub use yahoo::YahooSource;
