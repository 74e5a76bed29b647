//! Minimal CLI: lists bundled reports or prints one report's table.

use std::env;

use cns_fails_report::{
    GroupingMode, ReportStore, Selection, SortDirection, SortSpec, TableColumn, build_table,
    sort_rows,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = ReportStore::bundled();

    let mut report_id: Option<String> = None;
    let mut symbols: Vec<String> = Vec::new();
    let mut combine = true;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--symbols" => {
                if let Some(value) = args.next() {
                    symbols = value.split(',').map(str::to_string).collect();
                }
            }
            "--split" => combine = false,
            other => report_id = Some(other.to_string()),
        }
    }

    let Some(report_id) = report_id else {
        println!("Usage: cns-fails-report <report-id> [--symbols AAPL,MSFT] [--split]");
        println!();
        println!("Bundled reports:");
        for report in store.reports() {
            println!("  {:<18} {}", report.id, report.label);
        }
        return Ok(());
    };

    let selection = Selection::new(report_id, symbols, GroupingMode::from_combine_flag(combine));
    let table = build_table(&store, &selection)?;

    let mut rows = table.rows;
    sort_rows(
        &mut rows,
        &[SortSpec {
            column: TableColumn::Date,
            direction: SortDirection::Ascending,
        }],
    );

    let split = selection.mode == GroupingMode::SplitBySymbol;
    if split {
        println!("{:<8} {:<8} {:>12} {:>18}", "Date", "Symbol", "Quantity", "Notional");
    } else {
        println!("{:<8} {:>12} {:>18}", "Date", "Quantity", "Notional");
    }
    for row in &rows {
        if split {
            println!(
                "{:<8} {:<8} {:>12.0} {:>18}",
                row.date, row.symbol, row.quantity, row.formatted_notional
            );
        } else {
            println!(
                "{:<8} {:>12.0} {:>18}",
                row.date, row.quantity, row.formatted_notional
            );
        }
    }

    println!();
    println!("Symbols in report: {}", table.tickers.join(", "));
    println!("Share: ?{}", selection.query_string());
    Ok(())
}
