pub mod mock;
pub mod polygon;

pub use mock::MockSource;
pub use polygon::PolygonClient;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::models::{Candle, SymbolInfo, TimeInterval};

/// Supplies an ordered candle series for one (symbol, interval, date)
/// selection, oldest candle first.
#[async_trait]
pub trait MarketDataSource {
    async fn candles(
        &self,
        symbol: &SymbolInfo,
        interval: &TimeInterval,
        date: NaiveDate,
    ) -> Result<Vec<Candle>>;
}
