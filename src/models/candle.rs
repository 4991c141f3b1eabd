use serde::{Deserialize, Serialize};

/// One OHLC observation over a fixed time bucket, timestamped in unix
/// milliseconds. Produced once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// The shape the chart renderer consumes: unix seconds plus OHLC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn chart_point(&self) -> ChartPoint {
        ChartPoint {
            time: self.timestamp / 1000,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
        }
    }
}
