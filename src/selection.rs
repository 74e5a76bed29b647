//! User selection state and its reflection into a shareable query string.

use crate::types::GroupingMode;

/// The three inputs that drive every recomputation of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Identifier of the report being viewed.
    pub report_id: String,
    /// Selected ticker symbols, normalized to uppercase. Empty means
    /// nothing is shown.
    pub symbols: Vec<String>,
    /// Active grouping mode.
    pub mode: GroupingMode,
}

impl Selection {
    /// Builds a selection, uppercasing the symbols.
    pub fn new<S, I, T>(report_id: S, symbols: I, mode: GroupingMode) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            report_id: report_id.into(),
            symbols: symbols
                .into_iter()
                .map(|s| s.as_ref().to_uppercase())
                .collect(),
            mode,
        }
    }

    /// The query string reflecting the current symbol selection.
    #[must_use]
    pub fn query_string(&self) -> String {
        symbols_to_query(&self.symbols)
    }
}

/// Extracts the selected symbols from a page query string.
///
/// Accepts the string with or without its leading `?`. Symbols are
/// comma-separated under the `symbols` key, case-insensitive, and come
/// back uppercased; a missing key yields an empty selection.
///
/// # Examples
///
/// ```
/// use cns_fails_report::symbols_from_query;
///
/// assert_eq!(symbols_from_query("?symbols=aapl,MSFT"), vec!["AAPL", "MSFT"]);
/// assert!(symbols_from_query("?other=1").is_empty());
/// ```
#[must_use]
pub fn symbols_from_query(query: &str) -> Vec<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("symbols="))
        .map_or_else(Vec::new, |value| {
            value
                .split(',')
                .filter(|symbol| !symbol.is_empty())
                .map(str::to_uppercase)
                .collect()
        })
}

/// Renders a symbol selection as the `symbols` query parameter.
///
/// # Examples
///
/// ```
/// use cns_fails_report::symbols_to_query;
///
/// let selected = vec!["AAPL".to_string(), "MSFT".to_string()];
/// assert_eq!(symbols_to_query(&selected), "symbols=AAPL,MSFT");
/// ```
#[must_use]
pub fn symbols_to_query(symbols: &[String]) -> String {
    format!("symbols={}", symbols.join(","))
}
