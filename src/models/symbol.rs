#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// Starting price for the mock random walk.
    pub base_price: f64,
    /// Daily volatility factor, also used only by the mock generator.
    pub volatility: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub id: &'static str,
    pub label: &'static str,
    pub minutes: u32,
}
