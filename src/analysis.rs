use std::fmt;

use crate::errors::{Error, Result};
use crate::helpers::round_to_decimals;
use crate::models::Candle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// A candle that closes exactly where it opened counts as negative.
    fn of(candle: &Candle) -> Self {
        if candle.close > candle.open {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Positive => write!(f, "positive"),
            Direction::Negative => write!(f, "negative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LatestCandle {
    pub is_positive: bool,
    pub timestamp: u64,
    pub open: f64,
    pub close: f64,
    pub change: f64,
    pub percent_change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    pub count: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSummary {
    pub latest: LatestCandle,
    pub streak: Streak,
}

/// Derive the latest-candle change and the trailing same-direction streak
/// from a series ordered oldest first.
///
/// Change and percent change are rounded to two decimals; percent change is
/// undefined when the latest open is exactly zero (the division is left as
/// is and yields an infinity).
pub fn analyze(candles: &[Candle]) -> Result<TrendSummary> {
    let last = candles.last().ok_or(Error::EmptySeries)?;
    let direction = Direction::of(last);

    let mut count = 1;
    for candle in candles[..candles.len() - 1].iter().rev() {
        if Direction::of(candle) == direction {
            count += 1;
        } else {
            break;
        }
    }

    let change = round_to_decimals(last.close - last.open, 2);
    let percent_change = round_to_decimals(change / last.open * 100.0, 2);

    Ok(TrendSummary {
        latest: LatestCandle {
            is_positive: direction == Direction::Positive,
            timestamp: last.timestamp,
            open: last.open,
            close: last.close,
            change,
            percent_change,
        },
        streak: Streak { count, direction },
    })
}
