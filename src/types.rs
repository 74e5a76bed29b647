//! Domain types shared by the parser, aggregator and table layers.

use chrono::NaiveDate;

/// Sentinel symbol for rows that combine every selected ticker.
pub const ALL_SYMBOLS: &str = "ALL";

/// One filtered report row with its derived notional value.
///
/// Quantity and notional are kept as `f64` deliberately: a numeric field
/// that fails to parse becomes `f64::NAN` and flows through summation to
/// the displayed output, matching the accepted behavior of the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    /// Settlement date of the failure.
    pub date: NaiveDate,
    /// Settlement date formatted for display, e.g. `"Mar 01"`.
    pub display_date: String,
    /// Ticker symbol, or [`ALL_SYMBOLS`] in the date-only grouping.
    pub symbol: String,
    /// Failed-to-deliver quantity (integer-valued unless unparsable).
    pub quantity: f64,
    /// Quantity multiplied by the unit price.
    pub notional: f64,
}

/// One output row of the aggregation, ready for table display.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    /// Display date of the group, taken from the last record folded in.
    pub date: String,
    /// Settlement date backing [`AggregateRow::date`], used by sorters.
    pub date_key: NaiveDate,
    /// Ticker symbol, or [`ALL_SYMBOLS`] when combining across symbols.
    pub symbol: String,
    /// Summed quantity across the group.
    pub quantity: f64,
    /// Summed notional across the group, unrounded.
    pub notional: f64,
    /// Notional rounded to the nearest dollar and currency-formatted.
    pub formatted_notional: String,
}

/// How aggregate rows are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingMode {
    /// One row per date, quantities and notionals summed across all
    /// selected symbols.
    CombineByDate,
    /// One row per (symbol, date) pair.
    SplitBySymbol,
}

impl GroupingMode {
    /// Maps the viewer's "combine symbols by date" toggle onto a mode.
    #[inline]
    #[must_use]
    pub const fn from_combine_flag(combine: bool) -> Self {
        if combine {
            Self::CombineByDate
        } else {
            Self::SplitBySymbol
        }
    }
}
