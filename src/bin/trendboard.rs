use anyhow::Result;
use clap::Parser;

use trendboard::cli::Args;
use trendboard::config::Settings;
use trendboard::services::{DashboardSession, DataMode};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::from_env();
    if args.api_key.is_some() {
        settings.api_key = args.api_key.clone();
    }

    let mode = if args.live { DataMode::Live } else { DataMode::Mock };
    let mut session = DashboardSession::new(mode, &settings)?;
    session.select_symbol(&args.symbol)?;
    session.select_interval(&args.interval)?;
    if let Some(date) = args.date {
        session.select_date(date)?;
    }

    session.refresh().await?;

    let symbol = session.symbol();
    let interval = session.interval();
    println!(
        "{} ({}), {} bars, {}",
        symbol.name, symbol.id, interval.label, session.date()
    );

    match session.summary() {
        Some(summary) => {
            let latest = &summary.latest;
            let word = if latest.is_positive { "bullish" } else { "bearish" };
            println!(
                "latest: {} open {:.2} close {:.2} change {:+.2} ({:+.2}%)",
                word, latest.open, latest.close, latest.change, latest.percent_change
            );
            println!(
                "streak: {} consecutive {} candles",
                summary.streak.count, summary.streak.direction
            );
        }
        None => println!("no candles returned for {}", session.date()),
    }

    let points = session.chart_points();
    let tail = &points[points.len().saturating_sub(args.points)..];
    for point in tail {
        println!(
            "{}  o {:.2}  h {:.2}  l {:.2}  c {:.2}",
            point.time, point.open, point.high, point.low, point.close
        );
    }

    Ok(())
}
