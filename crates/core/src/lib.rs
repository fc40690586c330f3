//! Core constants and shared primitives for the EV Payback Calculator workspace.

/// Physical and market constants. Monetary defaults are quoted in PEN
/// (Peruvian sol); comparisons downstream happen in USD.
pub mod constants {
    /// Litres per US gallon.
    pub const LITERS_PER_GALLON: f64 = 3.78541;
    /// Default exchange rate applied when the rates file omits one (PEN per USD).
    pub const DEFAULT_EXCHANGE_RATE_PEN_PER_USD: f64 = 3.75;
    /// Default gasoline price (PEN per gallon).
    pub const DEFAULT_GASOLINE_PRICE_PEN_PER_GALLON: f64 = 15.99;
    /// Default electricity price (PEN per kWh).
    pub const DEFAULT_ELECTRICITY_PRICE_PEN_PER_KWH: f64 = 0.5634;
    /// Purchase-price multiplier for the electric-vehicle incentive (an 18% discount).
    pub const ELECTRIC_INCENTIVE_FACTOR: f64 = 0.82;
}

/// Monetary rounding helpers used at presentation boundaries only. The
/// simulation keeps full precision; tables and CSV rows round through here.
pub mod money {
    /// Round an amount to whole cents (2 decimal places).
    #[inline]
    pub fn round_to_cents(amount: f64) -> f64 {
        (amount * 100.0).round() / 100.0
    }

    /// Format an amount for report output, always showing cents.
    #[inline]
    pub fn format_usd(amount: f64) -> String {
        format!("{:.2}", amount)
    }
}
