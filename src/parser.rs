//! Parsing of raw pipe-delimited report text into grouped records.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::group::OrderedMap;
use crate::types::{ALL_SYMBOLS, ParsedRecord};

static ROW_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})(\d{2})(\d{2})").expect("valid row date regex"));

// Column layout of a CNS fails row.
const COL_DATE: usize = 0;
const COL_SYMBOL: usize = 2;
const COL_QUANTITY: usize = 3;
const COL_PRICE: usize = 5;

/// Result of one parse pass over a report.
///
/// The groupings only contain rows whose symbol was selected; the ticker
/// list always reflects the whole report so a symbol picker never shrinks
/// to the current filter.
#[derive(Debug, Clone)]
pub struct ParsedReport {
    /// Every distinct symbol seen in the report, in first-seen order.
    pub tickers: Vec<String>,
    /// Selected records grouped by symbol, then by `YYYY-MM-DD` date.
    pub(crate) by_symbol: OrderedMap<OrderedMap<Vec<ParsedRecord>>>,
    /// Selected records grouped by `YYYY-MM-DD` date only, with the
    /// symbol replaced by [`ALL_SYMBOLS`].
    pub(crate) by_date: OrderedMap<Vec<ParsedRecord>>,
}

/// Parses one report's raw text, keeping rows whose symbol is in
/// `selected_symbols`.
///
/// The first line is a header and is discarded. A row is kept only when
/// its first column contains eight consecutive digits; anything else
/// (trailing blanks, malformed rows) is dropped silently. Numeric fields
/// that fail to parse become `f64::NAN` and propagate through the
/// notional arithmetic unchanged.
#[must_use]
pub fn parse_report(text: &str, selected_symbols: &[String]) -> ParsedReport {
    let mut seen: HashSet<String> = HashSet::new();
    let mut tickers: Vec<String> = Vec::new();
    let mut by_symbol: OrderedMap<OrderedMap<Vec<ParsedRecord>>> = OrderedMap::new();
    let mut by_date: OrderedMap<Vec<ParsedRecord>> = OrderedMap::new();

    for line in text.split('\n').skip(1) {
        let columns: Vec<&str> = line.split('|').collect();

        let Some(caps) = ROW_DATE_RE.captures(columns[COL_DATE]) else {
            continue;
        };

        let date_key = format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]);
        let Some(symbol) = columns.get(COL_SYMBOL).map(|s| s.trim()) else {
            continue;
        };

        // The seen set reflects every pattern-matching row; only the
        // grouping below cares whether the digits form a real date.
        if seen.insert(symbol.to_string()) {
            tickers.push(symbol.to_string());
        }

        let Some(date) = parsed_date(&caps) else {
            continue;
        };
        if !selected_symbols.iter().any(|s| s == symbol) {
            continue;
        }

        // Missing or unparsable numeric cells become NaN and flow through
        // the arithmetic, same as the viewer always behaved.
        let quantity = columns
            .get(COL_QUANTITY)
            .and_then(|cell| cell.trim().parse::<i64>().ok())
            .map_or(f64::NAN, |q| q as f64);
        let price = columns
            .get(COL_PRICE)
            .and_then(|cell| cell.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN);

        let record = ParsedRecord {
            date,
            display_date: date.format("%b %d").to_string(),
            symbol: symbol.to_string(),
            quantity,
            notional: quantity * price,
        };

        by_symbol
            .get_or_insert_with(symbol, OrderedMap::new)
            .get_or_insert_with(&date_key, Vec::new)
            .push(record.clone());

        by_date.get_or_insert_with(&date_key, Vec::new).push(ParsedRecord {
            symbol: ALL_SYMBOLS.to_string(),
            ..record
        });
    }

    ParsedReport {
        tickers,
        by_symbol,
        by_date,
    }
}

/// Builds the settlement date from the matched digit groups.
///
/// Rows carrying an impossible calendar date (month 13 and the like) are
/// treated the same as rows that fail the digit pattern: skipped.
fn parsed_date(caps: &regex::Captures<'_>) -> Option<NaiveDate> {
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
