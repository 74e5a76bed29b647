//! Table assembly: the interface the presentation layer consumes.

use std::cmp::Ordering;

use crate::aggregate::aggregate;
use crate::error::ReportError;
use crate::parser::parse_report;
use crate::selection::Selection;
use crate::store::ReportStore;
use crate::types::{AggregateRow, GroupingMode};

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    /// Settlement date.
    Date,
    /// Ticker symbol; only shown in split mode.
    Symbol,
    /// Failed-to-deliver quantity.
    Quantity,
    /// Notional value.
    Notional,
}

impl TableColumn {
    /// Tie-break rank for multi-column sorts: when several sorts are
    /// active, higher-ranked columns are compared first.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Date => 4,
            Self::Symbol => 3,
            Self::Quantity => 2,
            Self::Notional => 1,
        }
    }

    /// Column header shown to the user.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Symbol => "Symbol",
            Self::Quantity => "Quantity",
            Self::Notional => "Notional",
        }
    }

    fn compare(self, a: &AggregateRow, b: &AggregateRow) -> Ordering {
        match self {
            Self::Date => a.date_key.cmp(&b.date_key),
            Self::Symbol => a.symbol.cmp(&b.symbol),
            // total_cmp keeps NaN rows in a deterministic position.
            Self::Quantity => a.quantity.total_cmp(&b.quantity),
            Self::Notional => a.notional.total_cmp(&b.notional),
        }
    }
}

/// Sort direction of an active column sorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

/// One user-activated column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// The column being sorted.
    pub column: TableColumn,
    /// Requested direction.
    pub direction: SortDirection,
}

impl SortSpec {
    fn compare(self, a: &AggregateRow, b: &AggregateRow) -> Ordering {
        let ordering = self.column.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The columns visible for a grouping mode, in display order.
///
/// The symbol column is meaningless when every row is the combined
/// sentinel, so combine mode drops it.
#[must_use]
pub fn table_columns(mode: GroupingMode) -> Vec<TableColumn> {
    match mode {
        GroupingMode::CombineByDate => vec![
            TableColumn::Date,
            TableColumn::Quantity,
            TableColumn::Notional,
        ],
        GroupingMode::SplitBySymbol => vec![
            TableColumn::Date,
            TableColumn::Symbol,
            TableColumn::Quantity,
            TableColumn::Notional,
        ],
    }
}

/// Sorts rows by the active column sorters.
///
/// Columns are applied in descending [`TableColumn::priority`] order no
/// matter the order the sorts were activated in, and the sort is stable,
/// so rows equal under every active sorter keep their aggregation order.
pub fn sort_rows(rows: &mut [AggregateRow], active: &[SortSpec]) {
    let mut specs = active.to_vec();
    specs.sort_by_key(|spec| std::cmp::Reverse(spec.column.priority()));

    rows.sort_by(|a, b| {
        for spec in &specs {
            let ordering = spec.compare(a, b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}

/// Everything the presentation layer needs to render one report view.
#[derive(Debug, Clone)]
pub struct TableData {
    /// All symbols present in the report, for the symbol picker.
    pub tickers: Vec<String>,
    /// Aggregate rows for the current selection, unsorted.
    pub rows: Vec<AggregateRow>,
}

/// Runs the full parse-and-aggregate pipeline for a selection.
///
/// Pure function of the store and the selection: re-running it with the
/// same inputs always yields the same output, so the caller can simply
/// recompute on every selection change.
///
/// # Errors
///
/// Returns [`ReportError::UnknownReport`] when the selected report
/// identifier is not in the store.
pub fn build_table(store: &ReportStore, selection: &Selection) -> Result<TableData, ReportError> {
    let text = store
        .raw_text(&selection.report_id)
        .ok_or_else(|| ReportError::UnknownReport {
            id: selection.report_id.clone(),
        })?;

    let parsed = parse_report(text, &selection.symbols);
    let rows = aggregate(&parsed, selection.mode);

    Ok(TableData {
        tickers: parsed.tickers,
        rows,
    })
}
