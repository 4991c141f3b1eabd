use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::{Settings, API_KEY_ENV};
use crate::errors::{Error, Result};
use crate::models::{Candle, SymbolInfo, TimeInterval};

use super::MarketDataSource;

const PAGE_LIMIT: u32 = 5000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the vendor aggregates endpoint. One GET per (symbol,
/// interval, date) selection, no retries.
pub struct PolygonClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct AggregatesResponse {
    status: Option<String>,
    results: Option<Vec<AggregateBar>>,
}

#[derive(Debug, Deserialize)]
struct AggregateBar {
    t: Option<u64>,
    o: Option<f64>,
    h: Option<f64>,
    l: Option<f64>,
    c: Option<f64>,
    v: Option<f64>,
}

impl PolygonClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or(Error::MissingApiKey(API_KEY_ENV))?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: settings.base_url.clone(),
        })
    }

    /// Fetch every intraday bar for one calendar date at the requested
    /// minute granularity, normalized oldest first.
    pub async fn day_aggregates(
        &self,
        symbol: &str,
        interval: &TimeInterval,
        date: NaiveDate,
    ) -> Result<Vec<Candle>> {
        let url = format!(
            "{}/v2/aggs/ticker/{}/range/{}/minute/{}/{}",
            self.base_url, symbol, interval.minutes, date, date
        );
        debug!("GET {url}");

        let limit = PAGE_LIMIT.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("sort", "desc"),
                ("limit", limit.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Transport {
                status: status.as_u16(),
                body,
            });
        }

        parse_aggregates(&body)
    }
}

#[async_trait]
impl MarketDataSource for PolygonClient {
    async fn candles(
        &self,
        symbol: &SymbolInfo,
        interval: &TimeInterval,
        date: NaiveDate,
    ) -> Result<Vec<Candle>> {
        self.day_aggregates(symbol.id, interval, date).await
    }
}

fn parse_aggregates(body: &str) -> Result<Vec<Candle>> {
    let response: AggregatesResponse =
        serde_json::from_str(body).map_err(|e| Error::Format(e.to_string()))?;

    match response.status.as_deref() {
        Some("OK") | Some("DELAYED") => {}
        other => {
            return Err(Error::Format(format!(
                "status {}",
                other.unwrap_or("missing")
            )))
        }
    }

    let bars = response
        .results
        .ok_or_else(|| Error::Format("missing results list".to_string()))?;

    let mut candles: Vec<Candle> = bars.into_iter().filter_map(bar_to_candle).collect();
    // The endpoint is queried descending; the analyzer wants oldest first.
    candles.sort_by_key(|c| c.timestamp);

    Ok(candles)
}

// A zero-valued required field counts as missing and drops the bar.
fn bar_to_candle(bar: AggregateBar) -> Option<Candle> {
    let timestamp = bar.t.filter(|&t| t != 0)?;
    let open = bar.o.filter(|&v| v != 0.0)?;
    let high = bar.h.filter(|&v| v != 0.0)?;
    let low = bar.l.filter(|&v| v != 0.0)?;
    let close = bar.c.filter(|&v| v != 0.0)?;

    Some(Candle {
        timestamp,
        open,
        high,
        low,
        close,
        volume: bar.v,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_zero_results_is_empty_not_an_error() {
        let candles = parse_aggregates(r#"{"status":"OK","results":[]}"#).unwrap();
        assert!(candles.is_empty());
    }

    #[test]
    fn error_status_is_a_format_error() {
        let err = parse_aggregates(r#"{"status":"ERROR"}"#).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn missing_results_list_is_a_format_error() {
        let err = parse_aggregates(r#"{"status":"OK"}"#).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn unparsable_body_is_a_format_error() {
        let err = parse_aggregates("<html>upstream hiccup</html>").unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn delayed_status_counts_as_success() {
        let body = r#"{"status":"DELAYED","results":[{"t":1000,"o":1.0,"h":2.0,"l":0.5,"c":1.5,"v":100.0}]}"#;
        let candles = parse_aggregates(body).unwrap();
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].volume, Some(100.0));
    }

    #[test]
    fn descending_bars_are_resorted_ascending() {
        let body = r#"{"status":"OK","results":[
            {"t":3000,"o":1.0,"h":2.0,"l":0.5,"c":1.5},
            {"t":2000,"o":1.0,"h":2.0,"l":0.5,"c":1.5},
            {"t":1000,"o":1.0,"h":2.0,"l":0.5,"c":1.5}
        ]}"#;
        let candles = parse_aggregates(body).unwrap();
        let timestamps: Vec<u64> = candles.iter().map(|c| c.timestamp).collect();
        assert_eq!(timestamps, vec![1000, 2000, 3000]);
    }

    #[test]
    fn bars_with_missing_or_zero_fields_are_dropped() {
        let body = r#"{"status":"OK","results":[
            {"t":1000,"o":1.0,"h":2.0,"l":0.5,"c":1.5},
            {"t":2000,"o":0.0,"h":2.0,"l":0.5,"c":1.5},
            {"t":3000,"h":2.0,"l":0.5,"c":1.5},
            {"t":4000,"o":1.0,"h":2.0,"l":0.5,"c":1.5,"v":7.0}
        ]}"#;
        let candles = parse_aggregates(body).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].timestamp, 1000);
        assert_eq!(candles[0].volume, None);
        assert_eq!(candles[1].timestamp, 4000);
        assert_eq!(candles[1].volume, Some(7.0));
    }

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let settings = Settings {
            api_key: None,
            base_url: "https://example.invalid".to_string(),
        };
        assert!(matches!(
            PolygonClient::new(&settings),
            Err(Error::MissingApiKey(_))
        ));
    }

    #[test]
    fn transport_error_reports_the_status_code() {
        let err = Error::Transport {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert!(err.to_string().contains("403"));
    }
}
