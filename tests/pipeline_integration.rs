use cns_fails_report::{
    ALL_SYMBOLS, GroupingMode, ReportError, ReportStore, Selection, SortDirection, SortSpec,
    TableColumn, build_table, derive_label, sort_rows, symbols_from_query, symbols_to_query,
    table_columns,
};

const REPORT_ID: &str = "cnsfails202103a";

const SINGLE_SYMBOL: &str = "SETTLEMENT DATE|CUSIP|SYMBOL|QUANTITY (FAILS)|DESCRIPTION|PRICE\n\
20210301|037833100|AAPL|100|APPLE INC COM|150.00\n\
20210301|037833100|AAPL|50|APPLE INC COM|150.00\n";

const MULTI_SYMBOL: &str = "SETTLEMENT DATE|CUSIP|SYMBOL|QUANTITY (FAILS)|DESCRIPTION|PRICE\n\
20210301|037833100|AAPL|100|APPLE INC COM|10.00\n\
20210301|594918104|MSFT|200|MICROSOFT CORP COM|20.00\n\
20210302|037833100|AAPL|300|APPLE INC COM|10.00\n\
20210302|36467W109|GME|400|GAMESTOP CORP NEW CL A|5.00\n\
not a data row\n\
\n";

fn store_with(text: &str) -> ReportStore {
    ReportStore::new([(REPORT_ID, text)]).expect("valid report id")
}

fn selection(symbols: &[&str], combine: bool) -> Selection {
    Selection::new(
        REPORT_ID,
        symbols.iter().copied(),
        GroupingMode::from_combine_flag(combine),
    )
}

#[test]
fn combine_mode_sums_across_symbols_per_date() {
    let store = store_with(SINGLE_SYMBOL);
    let table = build_table(&store, &selection(&["AAPL"], true)).unwrap();

    assert_eq!(table.rows.len(), 1);
    let row = &table.rows[0];
    assert_eq!(row.date, "Mar 01");
    assert_eq!(row.symbol, ALL_SYMBOLS);
    assert_eq!(row.quantity, 150.0);
    assert_eq!(row.notional, 22500.0);
    assert_eq!(row.formatted_notional, "$22,500.00");
}

#[test]
fn split_mode_emits_one_row_per_symbol_and_date() {
    let store = store_with(SINGLE_SYMBOL);
    let table = build_table(&store, &selection(&["AAPL"], false)).unwrap();

    assert_eq!(table.rows.len(), 1);
    let row = &table.rows[0];
    assert_eq!(row.date, "Mar 01");
    assert_eq!(row.symbol, "AAPL");
    assert_eq!(row.quantity, 150.0);
    assert_eq!(row.notional, 22500.0);
}

#[test]
fn seen_tickers_ignore_the_selection_filter() {
    let store = store_with(MULTI_SYMBOL);

    let unfiltered = build_table(&store, &selection(&[], true)).unwrap();
    assert_eq!(unfiltered.tickers, vec!["AAPL", "MSFT", "GME"]);
    assert!(unfiltered.rows.is_empty());

    let filtered = build_table(&store, &selection(&["AAPL"], true)).unwrap();
    assert_eq!(filtered.tickers, vec!["AAPL", "MSFT", "GME"]);
}

#[test]
fn malformed_and_blank_rows_are_dropped() {
    let store = store_with(MULTI_SYMBOL);
    let table = build_table(&store, &selection(&["AAPL", "MSFT", "GME"], false)).unwrap();

    // Four valid data rows, each its own (symbol, date) group.
    assert_eq!(table.rows.len(), 4);
}

#[test]
fn impossible_calendar_dates_still_record_their_symbol() {
    // Column 0 matches the 8-digit pattern but month 99 is not a real
    // date: the ticker must still show up in the picker, while the row
    // itself stays out of every grouping.
    let text = "SETTLEMENT DATE|CUSIP|SYMBOL|QUANTITY (FAILS)|DESCRIPTION|PRICE\n\
20210301|037833100|AAPL|100|APPLE INC COM|150.00\n\
20219901|999999999|ZZZZ|10|BOGUS CO|1.00\n";
    let store = store_with(text);
    let table = build_table(&store, &selection(&["AAPL", "ZZZZ"], false)).unwrap();

    assert_eq!(table.tickers, vec!["AAPL", "ZZZZ"]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].symbol, "AAPL");
}

#[test]
fn unparsable_price_surfaces_as_nan_notional() {
    let text = "SETTLEMENT DATE|CUSIP|SYMBOL|QUANTITY (FAILS)|DESCRIPTION|PRICE\n\
20210301|037833100|AAPL|10|APPLE INC COM|abc\n";
    let store = store_with(text);
    let table = build_table(&store, &selection(&["AAPL"], true)).unwrap();

    // Accepted behavior: the bad value is displayed, not hidden.
    assert_eq!(table.rows.len(), 1);
    assert!(table.rows[0].notional.is_nan());
    assert_eq!(table.rows[0].quantity, 10.0);
    assert_eq!(table.rows[0].formatted_notional, "$NaN");
}

#[test]
fn quantities_are_conserved_across_groupings() {
    let store = store_with(MULTI_SYMBOL);
    let selected = selection(&["AAPL", "MSFT"], false);
    let table = build_table(&store, &selected).unwrap();

    let total: f64 = table.rows.iter().map(|row| row.quantity).sum();
    assert_eq!(total, 600.0);
}

#[test]
fn combine_and_split_modes_agree_per_date() {
    let store = store_with(MULTI_SYMBOL);
    let combined = build_table(&store, &selection(&["AAPL", "MSFT"], true)).unwrap();
    let split = build_table(&store, &selection(&["AAPL", "MSFT"], false)).unwrap();

    for row in &combined.rows {
        let quantity: f64 = split
            .rows
            .iter()
            .filter(|r| r.date_key == row.date_key)
            .map(|r| r.quantity)
            .sum();
        let notional: f64 = split
            .rows
            .iter()
            .filter(|r| r.date_key == row.date_key)
            .map(|r| r.notional)
            .sum();
        assert_eq!(quantity, row.quantity);
        assert_eq!(notional, row.notional);
    }
}

#[test]
fn pipeline_is_idempotent() {
    let store = store_with(MULTI_SYMBOL);
    let selected = selection(&["AAPL", "GME"], false);

    let first = build_table(&store, &selected).unwrap();
    let second = build_table(&store, &selected).unwrap();
    assert_eq!(first.tickers, second.tickers);
    assert_eq!(first.rows, second.rows);
}

#[test]
fn rows_keep_first_seen_order() {
    let store = store_with(MULTI_SYMBOL);
    let table = build_table(&store, &selection(&["AAPL", "MSFT", "GME"], true)).unwrap();

    let dates: Vec<&str> = table.rows.iter().map(|row| row.date.as_str()).collect();
    assert_eq!(dates, vec!["Mar 01", "Mar 02"]);
}

#[test]
fn sorters_apply_by_column_priority() {
    let store = store_with(MULTI_SYMBOL);
    let mut rows = build_table(&store, &selection(&["AAPL", "MSFT"], false))
        .unwrap()
        .rows;

    // Supplied symbol-first, but date has the higher tie-break rank and
    // must win.
    sort_rows(
        &mut rows,
        &[
            SortSpec {
                column: TableColumn::Symbol,
                direction: SortDirection::Ascending,
            },
            SortSpec {
                column: TableColumn::Date,
                direction: SortDirection::Descending,
            },
        ],
    );

    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|row| (row.date.as_str(), row.symbol.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![("Mar 02", "AAPL"), ("Mar 01", "AAPL"), ("Mar 01", "MSFT")]
    );
}

#[test]
fn symbol_column_only_appears_in_split_mode() {
    let combined = table_columns(GroupingMode::CombineByDate);
    assert!(!combined.contains(&TableColumn::Symbol));
    assert_eq!(combined[0], TableColumn::Date);

    let split = table_columns(GroupingMode::SplitBySymbol);
    assert_eq!(
        split,
        vec![
            TableColumn::Date,
            TableColumn::Symbol,
            TableColumn::Quantity,
            TableColumn::Notional,
        ]
    );
}

#[test]
fn query_string_round_trips_and_uppercases() {
    let symbols = vec!["AAPL".to_string(), "MSFT".to_string()];
    let query = symbols_to_query(&symbols);
    assert_eq!(query, "symbols=AAPL,MSFT");
    assert_eq!(symbols_from_query(&query), symbols);

    assert_eq!(
        symbols_from_query("?page=1&symbols=aapl,msft"),
        vec!["AAPL", "MSFT"]
    );
    assert!(symbols_from_query("?symbols=").is_empty());
    assert!(symbols_from_query("").is_empty());

    let selected = Selection::new(REPORT_ID, ["aapl", "gme"], GroupingMode::CombineByDate);
    assert_eq!(selected.symbols, vec!["AAPL", "GME"]);
    assert_eq!(selected.query_string(), "symbols=AAPL,GME");
}

#[test]
fn labels_derive_from_the_identifier() {
    assert_eq!(derive_label("cnsfails202012a").unwrap(), "December 2020 - 1/2");
    assert_eq!(derive_label("cnsfails202012b").unwrap(), "December 2020 - 2/2");
    assert_eq!(derive_label("cnsfails202103a").unwrap(), "March 2021 - 1/2");

    assert!(matches!(
        derive_label("fails2021"),
        Err(ReportError::ReportId { .. })
    ));
    assert!(matches!(
        derive_label("cnsfails202199a"),
        Err(ReportError::ReportId { .. })
    ));
}

#[test]
fn bundled_store_lists_reports_chronologically() {
    let store = ReportStore::bundled();
    let ids: Vec<&str> = store.reports().map(|report| report.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "cnsfails202012a",
            "cnsfails202012b",
            "cnsfails202101a",
            "cnsfails202101b",
            "cnsfails202102a",
            "cnsfails202102b",
            "cnsfails202103a",
        ]
    );

    let first = store.reports().next().unwrap();
    assert_eq!(first.label, "December 2020 - 1/2");
    assert_eq!(store.latest().unwrap().id, "cnsfails202103a");
    assert!(store.raw_text("cnsfails202101b").is_some());
    assert!(store.raw_text("cnsfails209912z").is_none());
}

#[test]
fn unknown_report_id_is_an_error() {
    let store = store_with(SINGLE_SYMBOL);
    let selected = Selection::new("cnsfails202112a", ["AAPL"], GroupingMode::CombineByDate);
    assert!(matches!(
        build_table(&store, &selected),
        Err(ReportError::UnknownReport { .. })
    ));
}
