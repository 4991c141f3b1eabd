use std::env;

use crate::models::{SymbolInfo, TimeInterval};

pub const API_KEY_ENV: &str = "TRENDBOARD_API_KEY";
pub const API_URL_ENV: &str = "TRENDBOARD_API_URL";

const DEFAULT_BASE_URL: &str = "https://api.polygon.io";

pub const SYMBOLS: &[SymbolInfo] = &[
    SymbolInfo { id: "AAPL", name: "Apple Inc.", base_price: 175.0, volatility: 2.0 },
    SymbolInfo { id: "GOOGL", name: "Alphabet Inc.", base_price: 140.0, volatility: 2.5 },
    SymbolInfo { id: "TSLA", name: "Tesla, Inc.", base_price: 250.0, volatility: 4.0 },
    SymbolInfo { id: "SPY", name: "S&P 500 ETF", base_price: 450.0, volatility: 1.5 },
    SymbolInfo { id: "QQQ", name: "Nasdaq 100 ETF", base_price: 380.0, volatility: 1.8 },
    SymbolInfo { id: "DIA", name: "Dow Jones ETF", base_price: 350.0, volatility: 1.3 },
];

pub const INTERVALS: &[TimeInterval] = &[
    TimeInterval { id: "1m", label: "1 Minute", minutes: 1 },
    TimeInterval { id: "5m", label: "5 Minutes", minutes: 5 },
    TimeInterval { id: "15m", label: "15 Minutes", minutes: 15 },
    TimeInterval { id: "30m", label: "30 Minutes", minutes: 30 },
    TimeInterval { id: "1h", label: "1 Hour", minutes: 60 },
    TimeInterval { id: "4h", label: "4 Hours", minutes: 240 },
    TimeInterval { id: "1d", label: "1 Day", minutes: 1440 },
];

pub fn symbol(id: &str) -> Option<&'static SymbolInfo> {
    SYMBOLS.iter().find(|s| s.id.eq_ignore_ascii_case(id))
}

pub fn interval(id: &str) -> Option<&'static TimeInterval> {
    INTERVALS.iter().find(|i| i.id == id)
}

pub fn default_symbol() -> &'static SymbolInfo {
    &SYMBOLS[0]
}

pub fn default_interval() -> &'static TimeInterval {
    &INTERVALS[4]
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()),
            base_url: env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}
