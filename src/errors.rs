use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no API key configured: set {0} or pass --api-key")]
    MissingApiKey(&'static str),

    #[error("request failed with HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("unexpected aggregates payload: {0}")]
    Format(String),

    #[error("unknown symbol {0:?}")]
    UnknownSymbol(String),

    #[error("unknown interval {0:?}")]
    UnknownInterval(String),

    #[error("date {0} is not available yet; latest allowed is {1}")]
    DateOutOfRange(NaiveDate, NaiveDate),

    #[error("cannot analyze an empty candle series")]
    EmptySeries,
}

pub type Result<T> = std::result::Result<T, Error>;
