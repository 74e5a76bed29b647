#![warn(missing_docs)]
//! Parsing and aggregation of SEC CNS failure-to-deliver report snapshots.
//!
//! The pipeline is a pure function of three user inputs: which report is
//! open, which ticker symbols are selected, and whether rows are combined
//! across symbols per date or split per (symbol, date). [`build_table`]
//! runs the whole thing; the pieces are exposed individually for callers
//! that only need part of it.

mod aggregate;
mod error;
mod group;
mod parser;
mod selection;
mod store;
mod table;
mod types;
mod utils;

pub use crate::aggregate::aggregate;
pub use crate::error::ReportError;
pub use crate::parser::{ParsedReport, parse_report};
pub use crate::selection::{Selection, symbols_from_query, symbols_to_query};
pub use crate::store::{ReportStore, StoredReport, derive_label};
pub use crate::table::{
    SortDirection, SortSpec, TableColumn, TableData, build_table, sort_rows, table_columns,
};
pub use crate::types::{ALL_SYMBOLS, AggregateRow, GroupingMode, ParsedRecord};
pub use crate::utils::format_usd;
