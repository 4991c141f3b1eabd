use anyhow::{bail, Result};
use clap::Parser;

use trendboard::config;
use trendboard::data::mock;

#[derive(Debug, Parser)]
#[command(about = "Dump a generated candle series as JSON lines")]
struct Args {
    #[arg(default_value = "AAPL")]
    symbol: String,

    #[arg(short, long, default_value = "1h")]
    interval: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let Some(symbol) = config::symbol(&args.symbol) else {
        bail!("unknown symbol {:?}", args.symbol);
    };
    let Some(interval) = config::interval(&args.interval) else {
        bail!("unknown interval {:?}", args.interval);
    };

    for candle in mock::generate_series(symbol, interval) {
        println!("{}", serde_json::to_string(&candle)?);
    }

    Ok(())
}
