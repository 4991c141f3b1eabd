use chrono::{Duration, NaiveDate, Utc};
use log::{info, warn};

use crate::analysis::{self, TrendSummary};
use crate::config::{self, Settings};
use crate::data::{MarketDataSource, MockSource, PolygonClient};
use crate::errors::{Error, Result};
use crate::models::{Candle, ChartPoint, SymbolInfo, TimeInterval};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    Mock,
    Live,
}

/// The most recent calendar date with a complete day of bars.
pub fn latest_complete_day() -> NaiveDate {
    Utc::now().date_naive() - Duration::days(1)
}

/// Owns the current selection and the latest result set. One request in
/// flight at a time; every refresh replaces candles and summary wholesale.
pub struct DashboardSession {
    source: Box<dyn MarketDataSource + Send + Sync>,
    symbol: &'static SymbolInfo,
    interval: &'static TimeInterval,
    date: NaiveDate,
    candles: Vec<Candle>,
    summary: Option<TrendSummary>,
    last_error: Option<String>,
}

impl DashboardSession {
    pub fn new(mode: DataMode, settings: &Settings) -> Result<Self> {
        let source: Box<dyn MarketDataSource + Send + Sync> = match mode {
            DataMode::Mock => Box::new(MockSource),
            DataMode::Live => Box::new(PolygonClient::new(settings)?),
        };
        Ok(Self::with_source(source))
    }

    pub fn with_source(source: Box<dyn MarketDataSource + Send + Sync>) -> Self {
        Self {
            source,
            symbol: config::default_symbol(),
            interval: config::default_interval(),
            date: latest_complete_day(),
            candles: Vec::new(),
            summary: None,
            last_error: None,
        }
    }

    pub fn select_symbol(&mut self, id: &str) -> Result<()> {
        self.symbol = config::symbol(id).ok_or_else(|| Error::UnknownSymbol(id.to_string()))?;
        Ok(())
    }

    pub fn select_interval(&mut self, id: &str) -> Result<()> {
        self.interval =
            config::interval(id).ok_or_else(|| Error::UnknownInterval(id.to_string()))?;
        Ok(())
    }

    /// Rejects dates past the latest complete day; the prior date stays.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<()> {
        let latest = latest_complete_day();
        if date > latest {
            return Err(Error::DateOutOfRange(date, latest));
        }
        self.date = date;
        Ok(())
    }

    pub async fn refresh(&mut self) -> Result<()> {
        info!(
            "loading {} candles for {} on {}",
            self.interval.id, self.symbol.id, self.date
        );

        match self
            .source
            .candles(self.symbol, self.interval, self.date)
            .await
        {
            Ok(candles) => {
                self.summary = if candles.is_empty() {
                    None
                } else {
                    Some(analysis::analyze(&candles)?)
                };
                self.candles = candles;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                warn!("refresh failed: {err}");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Manual retry: re-run the fetch with the current selection.
    pub async fn retry(&mut self) -> Result<()> {
        self.refresh().await
    }

    /// Back to the default selection, then refresh.
    pub async fn reset(&mut self) -> Result<()> {
        self.symbol = config::default_symbol();
        self.interval = config::default_interval();
        self.date = latest_complete_day();
        self.candles.clear();
        self.summary = None;
        self.last_error = None;
        self.refresh().await
    }

    pub fn symbol(&self) -> &'static SymbolInfo {
        self.symbol
    }

    pub fn interval(&self) -> &'static TimeInterval {
        self.interval
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn summary(&self) -> Option<&TrendSummary> {
        self.summary.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.candles.iter().map(Candle::chart_point).collect()
    }
}
