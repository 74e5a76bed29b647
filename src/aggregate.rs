//! Aggregation of parsed records into table rows.

use crate::parser::ParsedReport;
use crate::types::{AggregateRow, GroupingMode, ParsedRecord};
use crate::utils::format_usd;

/// Flattens the parsed groupings into one aggregate row per group.
///
/// Emission order is the first-seen order of group keys during parsing;
/// any display ordering on top of that belongs to the table's sorters.
/// An empty selection simply yields an empty sequence.
#[must_use]
pub fn aggregate(parsed: &ParsedReport, mode: GroupingMode) -> Vec<AggregateRow> {
    match mode {
        GroupingMode::CombineByDate => parsed
            .by_date
            .iter()
            .filter_map(|(_, records)| fold_group(records))
            .collect(),
        GroupingMode::SplitBySymbol => parsed
            .by_symbol
            .iter()
            .flat_map(|(_, dates)| dates.iter().filter_map(|(_, records)| fold_group(records)))
            .collect(),
    }
}

/// Folds one group of records into a single row.
///
/// The displayed date and symbol come from the last record folded, not
/// from the group key. Every record in a group shares both, so the two
/// are equivalent; the fold form is kept because it is the behavior the
/// viewer always had.
fn fold_group(records: &[ParsedRecord]) -> Option<AggregateRow> {
    let last = records.last()?;

    let mut quantity = 0.0;
    let mut notional = 0.0;
    for record in records {
        quantity += record.quantity;
        notional += record.notional;
    }

    Some(AggregateRow {
        date: last.display_date.clone(),
        date_key: last.date,
        symbol: last.symbol.clone(),
        quantity,
        notional,
        // Round the float sum to whole dollars before formatting so
        // sub-cent summation artifacts never reach the display.
        formatted_notional: format_usd(notional.round()),
    })
}
