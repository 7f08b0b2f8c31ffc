use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Value, json};
use trellis::prelude::*;
use trellis::table::render::{LOADING_LABEL, SELECT_ALL_LABEL, SELECT_ROW_LABEL};
use trellis::table::{CellContent, DEFAULT_EMPTY_MESSAGE};

fn users() -> Vec<Value> {
    vec![
        json!({"id": "u1", "name": "Mohit Kumar", "email": "mohit@demo.com", "age": 31}),
        json!({"id": "u2", "name": "Bhavesh Kumar", "email": "bhavesh@demo.com", "age": 21}),
        json!({"id": "u3", "name": "Chaman", "email": "chaman@demo.com", "age": null}),
    ]
}

fn columns() -> Vec<Column<Value>> {
    vec![
        Column::new("Name", Accessor::field("name")).id("name").sortable(),
        Column::new("Email", Accessor::field("email")).id("email"),
        Column::new("Age", Accessor::field("age")).id("age").sortable().fixed(8),
    ]
}

fn by_id() -> RowIdFn<Value> {
    Arc::new(|row: &Value, _: usize| row["id"].as_str().unwrap_or_default().to_string())
}

fn table() -> DataTable<Value> {
    DataTable::with_rows(columns(), users())
        .row_id(by_id())
        .selectable(true)
}

fn view_ids(view: &TableView) -> Vec<String> {
    view.rows.iter().map(|r| r.id.clone()).collect()
}

// ============================================================================
// Sorting through header clicks
// ============================================================================

#[test]
fn test_header_click_cycles_sort() {
    let mut table = table();
    assert!(table.sort().is_none());

    let result = table.on_header_click("age");
    assert_eq!(
        result.into_event(),
        Some(TableEvent::SortChanged(SortState::ascending("age")))
    );
    assert_eq!(view_ids(&table.view().unwrap()), vec!["u2", "u1", "u3"]);

    table.on_header_click("age");
    assert_eq!(table.sort(), Some(&SortState::descending("age")));
    assert_eq!(view_ids(&table.view().unwrap()), vec!["u1", "u2", "u3"]);

    table.on_header_click("age");
    assert_eq!(table.sort(), Some(&SortState::ascending("age")));
}

#[test]
fn test_header_click_on_plain_column_is_ignored() {
    let mut table = table();
    table.on_header_click("name");
    let result = table.on_header_click("email");

    assert_eq!(result, EventResult::Ignored);
    assert_eq!(table.sort(), Some(&SortState::ascending("name")));
}

#[test]
fn test_rows_are_not_reordered_in_place() {
    let mut table = table();
    table.on_header_click("age");
    let source: Vec<_> = table.rows().iter().map(|r| r["id"].clone()).collect();
    assert_eq!(source, vec![json!("u1"), json!("u2"), json!("u3")]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_toggle_row_emits_selected_rows() {
    let mut table = table();
    let event = table.toggle_row("u2").into_event();
    assert_eq!(event, Some(TableEvent::SelectionChanged(vec![users()[1].clone()])));
    assert!(table.is_selected("u2"));
}

#[test]
fn test_selected_rows_in_source_order_even_when_sorted() {
    let mut table = table();
    table.on_header_click("age");
    table.toggle_row("u2");
    let event = table.toggle_row("u1").into_event();

    let users = users();
    assert_eq!(
        event,
        Some(TableEvent::SelectionChanged(vec![users[0].clone(), users[1].clone()]))
    );
}

#[test]
fn test_toggle_all_round_trip() {
    let mut table = table();

    let event = table.toggle_all().into_event();
    assert_eq!(event, Some(TableEvent::SelectionChanged(users())));
    assert!(table.is_all_selected());

    let event = table.toggle_all().into_event();
    assert_eq!(event, Some(TableEvent::SelectionChanged(Vec::new())));
    assert!(table.selection().is_empty());
}

#[test]
fn test_selection_ignored_when_not_selectable() {
    let mut table = table();
    table.set_selectable(false);

    assert_eq!(table.toggle_all(), EventResult::Ignored);
    assert_eq!(table.toggle_row("u1"), EventResult::Ignored);
    assert!(table.selection().is_empty());
}

#[test]
fn test_selection_survives_row_replacement() {
    let mut table = table();
    table.toggle_row("u1");
    table.toggle_row("u3");

    table.set_rows(vec![users()[2].clone()]);
    assert_eq!(table.selected_rows(), vec![users()[2].clone()]);

    table.set_rows(users());
    assert_eq!(table.selected_rows(), vec![users()[0].clone(), users()[2].clone()]);
}

#[test]
fn test_positional_selection_retargets_after_reorder() {
    // Without an identity function, selection follows positions.
    let mut table = DataTable::with_rows(columns(), users()).selectable(true);
    table.toggle_row("0");

    let mut reordered = users();
    reordered.reverse();
    table.set_rows(reordered);

    assert_eq!(table.selected_rows(), vec![users()[2].clone()]);
}

#[test]
fn test_dirty_tracking() {
    let mut table = table();
    assert!(!table.is_dirty());
    table.toggle_row("u1");
    assert!(table.is_dirty());
    table.clear_dirty();
    table.on_header_click("email");
    assert!(!table.is_dirty());
}

// ============================================================================
// View
// ============================================================================

#[test]
fn test_header_aria_and_indicators() {
    let mut table = table();
    table.on_header_click("age");
    table.on_header_click("age");
    let view = table.view().unwrap();

    let name = &view.headers[0];
    assert_eq!(name.aria_sort, AriaSort::None);
    assert_eq!(name.indicator, Some("↕"));

    let email = &view.headers[1];
    assert_eq!(email.aria_sort.as_str(), "none");
    assert_eq!(email.indicator, None);

    let age = &view.headers[2];
    assert_eq!(age.aria_sort.as_str(), "descending");
    assert_eq!(age.indicator, Some("▼"));
    assert_eq!(age.width, Some(8));
}

#[test]
fn test_view_cells_and_checkboxes() {
    let mut table = table();
    table.toggle_row("u3");
    let view = table.view().unwrap();

    assert_eq!(view.select_all, Some(false));
    let third = &view.rows[2];
    assert_eq!(third.id, "u3");
    assert_eq!(third.selected, Some(true));
    assert_eq!(third.cells[0].content, CellContent::Text("Chaman".into()));
    assert_eq!(third.cells[2].content, CellContent::Text(String::new()));
    assert_eq!(view.rows[0].selected, Some(false));
    assert_eq!(view.select_all_label, Some(SELECT_ALL_LABEL));
    assert!(view.rows.iter().all(|r| r.select_label == Some(SELECT_ROW_LABEL)));
}

#[test]
fn test_view_without_selection_has_no_checkboxes() {
    let table = DataTable::with_rows(columns(), users());
    let view = table.view().unwrap();
    assert_eq!(view.select_all, None);
    assert_eq!(view.select_all_label, None);
    assert!(view.rows.iter().all(|r| r.selected.is_none() && r.select_label.is_none()));
}

#[test]
fn test_custom_cell_renderer() {
    let cols = vec![
        Column::new("Age", Accessor::field("age"))
            .cell(|value: &CellValue, row: &Value| match value {
                CellValue::Null => format!("{}: unknown", row["id"].as_str().unwrap_or("?")),
                other => format!("{} yrs", other),
            }),
    ];
    let table = DataTable::with_rows(cols, users()).row_id(by_id());
    let view = table.view().unwrap();
    let texts: Vec<_> = view
        .rows
        .iter()
        .map(|r| r.cells[0].content.text_or_blank().to_string())
        .collect();
    assert_eq!(texts, vec!["31 yrs", "21 yrs", "u3: unknown"]);
}

#[test]
fn test_faulting_cell_is_reported_per_cell() {
    let mut cols = columns();
    cols.push(Column::new(
        "Domain",
        Accessor::try_derive(|row: &Value| {
            let email = row["email"].as_str().unwrap_or_default();
            match email.split_once('@') {
                Some((_, domain)) if row["age"].is_number() => Ok(CellValue::text(domain)),
                _ => Err(ValueError::new("no domain")),
            }
        }),
    ));
    let table = DataTable::with_rows(cols, users()).row_id(by_id());
    let view = table.view().unwrap();

    assert_eq!(view.rows[0].cells[3].content, CellContent::Text("demo.com".into()));
    match &view.rows[2].cells[3].content {
        CellContent::Fault(e) => {
            assert_eq!(e.column, "Domain");
            assert_eq!(e.row, "u3");
        }
        other => panic!("expected fault, got {:?}", other),
    }
    assert_eq!(view.rows[2].cells[3].content.text_or_blank(), "");
}

#[test]
fn test_faulting_sort_column_fails_the_view() {
    let cols = vec![
        Column::new(
            "Strict",
            Accessor::try_derive(|row: &Value| {
                row["age"]
                    .as_i64()
                    .map(CellValue::Int)
                    .ok_or_else(|| ValueError::new("missing age"))
            }),
        )
        .sortable(),
    ];
    let mut table = DataTable::with_rows(cols, users()).row_id(by_id());
    assert!(table.view().is_ok());

    table.on_header_click("Strict");
    let err = table.view().unwrap_err();
    assert_eq!(err.row, "u3");
}

#[test]
fn test_empty_message_when_idle() {
    let table = DataTable::new(columns()).selectable(true);
    let view = table.view().unwrap();
    let empty = view.empty.expect("empty row");

    assert_eq!(empty.message, DEFAULT_EMPTY_MESSAGE);
    assert_eq!(empty.span, 4);
    assert!(!view.busy);
    assert_eq!(view.loading_label, None);
}

#[test]
fn test_empty_message_suppressed_while_loading() {
    let table = DataTable::<Value>::new(columns())
        .empty_message("Nobody here")
        .loading(true);
    let view = table.view().unwrap();

    assert!(view.empty.is_none());
    assert!(view.busy);
    assert_eq!(view.loading_label, Some(LOADING_LABEL));
}

#[test]
fn test_custom_empty_message() {
    let table = DataTable::<Value>::new(columns()).empty_message("Nobody here");
    let empty = table.view().unwrap().empty.expect("empty row");
    assert_eq!(empty.message, "Nobody here");
    assert_eq!(empty.span, 3);
}

#[test]
fn test_select_all_unchecked_for_empty_table() {
    let table = DataTable::<Value>::new(columns()).selectable(true);
    assert_eq!(table.view().unwrap().select_all, Some(false));
}

#[test]
fn test_map_records() {
    let rows: Vec<HashMap<String, CellValue>> = vec![
        HashMap::from([("n".to_string(), CellValue::Int(3))]),
        HashMap::from([("n".to_string(), CellValue::Int(1))]),
    ];
    let mut table = DataTable::with_rows(
        vec![Column::new("N", Accessor::field("n")).sortable()],
        rows,
    );
    table.on_header_click("N");
    let view = table.view().unwrap();
    assert_eq!(view_ids(&view), vec!["1", "0"]);
}
