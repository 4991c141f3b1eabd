pub mod dashboard;

pub use dashboard::{latest_complete_day, DashboardSession, DataMode};
