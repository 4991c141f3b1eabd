pub mod candle;
pub mod symbol;

pub use candle::{Candle, ChartPoint};
pub use symbol::{SymbolInfo, TimeInterval};
