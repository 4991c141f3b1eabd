use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

use crate::errors::Result;
use crate::helpers::round_to_decimals;
use crate::models::{Candle, SymbolInfo, TimeInterval};

use super::MarketDataSource;

const LOOKBACK_MINUTES: u32 = 30 * 24 * 60;

/// Random-walk a 30-day candle history ending now, most recent last.
pub fn generate_series(symbol: &SymbolInfo, interval: &TimeInterval) -> Vec<Candle> {
    series_ending_at(symbol, interval, Utc::now())
}

/// The walk multiplies the symbol volatility by sqrt(minutes/1440) so that
/// shorter bars move less per step. Always yields
/// `LOOKBACK_MINUTES / interval.minutes + 1` candles.
pub fn series_ending_at(
    symbol: &SymbolInfo,
    interval: &TimeInterval,
    end: DateTime<Utc>,
) -> Vec<Candle> {
    let mut rng = rand::rng();
    let num_candles = LOOKBACK_MINUTES / interval.minutes;
    let adjusted_volatility = symbol.volatility * (interval.minutes as f64 / 1440.0).sqrt();

    let mut series = Vec::with_capacity(num_candles as usize + 1);
    let mut base_price = symbol.base_price;

    for i in (0..=num_candles).rev() {
        let at = end - Duration::minutes(i as i64 * interval.minutes as i64);

        let volatility = rng.random::<f64>() * adjusted_volatility + adjusted_volatility / 2.0;
        let change_percent = (rng.random::<f64>() - 0.5) * volatility;
        let change = base_price * change_percent / 100.0;

        let open = base_price;
        let close = round_to_decimals(base_price + change, 2);
        let high = round_to_decimals(open.max(close) + rng.random::<f64>() * adjusted_volatility * 2.0, 2);
        let low = round_to_decimals(open.min(close) - rng.random::<f64>() * adjusted_volatility * 2.0, 2);

        series.push(Candle {
            timestamp: at.timestamp_millis() as u64,
            open,
            high,
            low,
            close,
            volume: None,
        });

        base_price = close;
    }

    series
}

/// Mock-mode source. The requested date is ignored; the walk always covers
/// the trailing 30 days.
pub struct MockSource;

#[async_trait]
impl MarketDataSource for MockSource {
    async fn candles(
        &self,
        symbol: &SymbolInfo,
        interval: &TimeInterval,
        _date: NaiveDate,
    ) -> Result<Vec<Candle>> {
        Ok(generate_series(symbol, interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn fixed_end() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-02T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn one_minute_series_covers_thirty_days() {
        let symbol = config::symbol("AAPL").unwrap();
        let interval = config::interval("1m").unwrap();
        let series = series_ending_at(symbol, interval, fixed_end());
        assert_eq!(series.len(), 43_201);
    }

    #[test]
    fn daily_series_has_thirty_one_candles() {
        let symbol = config::symbol("AAPL").unwrap();
        let interval = config::interval("1d").unwrap();
        let series = series_ending_at(symbol, interval, fixed_end());
        assert_eq!(series.len(), 31);
    }

    #[test]
    fn candles_are_ordered_oldest_first() {
        let symbol = config::symbol("SPY").unwrap();
        let interval = config::interval("1h").unwrap();
        let series = series_ending_at(symbol, interval, fixed_end());

        for pair in series.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
        assert_eq!(series.last().unwrap().timestamp, fixed_end().timestamp_millis() as u64);
    }

    #[test]
    fn walk_continues_from_the_previous_close() {
        let symbol = config::symbol("QQQ").unwrap();
        let interval = config::interval("4h").unwrap();
        let series = series_ending_at(symbol, interval, fixed_end());

        for pair in series.windows(2) {
            assert_eq!(pair[1].open, pair[0].close);
        }
    }

    #[test]
    fn high_low_envelope_holds() {
        let symbol = config::symbol("TSLA").unwrap();
        let interval = config::interval("1h").unwrap();
        let series = series_ending_at(symbol, interval, fixed_end());

        for candle in &series {
            assert!(candle.high >= candle.open.max(candle.close));
            assert!(candle.low <= candle.open.min(candle.close));
            assert_eq!(candle.close, round_to_decimals(candle.close, 2));
            assert_eq!(candle.high, round_to_decimals(candle.high, 2));
            assert_eq!(candle.low, round_to_decimals(candle.low, 2));
        }
    }
}
