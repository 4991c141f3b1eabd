use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(default_value = "AAPL")]
    pub symbol: String,

    #[arg(short, long, default_value = "1h")]
    pub interval: String,

    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    #[arg(long)]
    pub live: bool,

    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value_t = 10)]
    pub points: usize,
}

pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date {s:?}, expected YYYY-MM-DD"))
}
