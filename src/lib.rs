pub mod analysis;
pub mod cli;
pub mod config;
pub mod data;
pub mod errors;
pub mod helpers;
pub mod models;
pub mod services;

pub use analysis::{analyze, Direction, TrendSummary};
pub use errors::{Error, Result};
pub use models::{Candle, ChartPoint};
pub use services::{DashboardSession, DataMode};
