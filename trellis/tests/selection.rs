use std::sync::Arc;

use serde_json::{Value, json};
use trellis::table::selection::{all_selected, selected_rows};
use trellis::table::{RowIdFn, Selection, assign_identities, toggle_all, toggle_one};

fn users() -> Vec<Value> {
    vec![
        json!({"id": "u1", "age": 31}),
        json!({"id": "u2", "age": 21}),
        json!({"id": "u3", "age": null}),
    ]
}

fn by_id() -> RowIdFn<Value> {
    Arc::new(|row: &Value, _: usize| row["id"].as_str().unwrap_or_default().to_string())
}

fn row_ids(rows: &[&Value]) -> Vec<String> {
    rows.iter()
        .map(|r| r["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// toggle_all
// ============================================================================

#[test]
fn test_toggle_all_selects_everything() {
    let rows = users();
    let identified = assign_identities(&rows, Some(&by_id()));
    let outcome = toggle_all(&identified, &Selection::new());

    assert_eq!(outcome.selection.selected(), vec!["u1", "u2", "u3"]);
    assert_eq!(row_ids(&outcome.selected_rows), vec!["u1", "u2", "u3"]);
}

#[test]
fn test_toggle_all_from_partial_selects_everything() {
    let rows = users();
    let identified = assign_identities(&rows, Some(&by_id()));
    let outcome = toggle_all(&identified, &Selection::from_ids(["u2"]));
    assert_eq!(outcome.selection.len(), 3);
}

#[test]
fn test_toggle_all_when_all_selected_clears() {
    let rows = users();
    let identified = assign_identities(&rows, Some(&by_id()));
    let outcome = toggle_all(&identified, &Selection::from_ids(["u1", "u2", "u3"]));

    assert!(outcome.selection.is_empty());
    assert!(outcome.selected_rows.is_empty());
}

#[test]
fn test_toggle_all_is_its_own_inverse() {
    let rows = users();
    let identified = assign_identities(&rows, Some(&by_id()));
    for start in [Selection::new(), Selection::from_ids(["u1", "u2", "u3"])] {
        let once = toggle_all(&identified, &start);
        let twice = toggle_all(&identified, &once.selection);
        assert_eq!(twice.selection, start);
    }
}

#[test]
fn test_toggle_all_on_empty_rows() {
    let rows: Vec<Value> = Vec::new();
    let identified = assign_identities(&rows, None);
    let outcome = toggle_all(&identified, &Selection::new());

    assert!(outcome.selection.is_empty());
    assert!(!all_selected(&identified, &outcome.selection));
}

#[test]
fn test_duplicate_ids_collide() {
    // Documented behaviour, not a guarantee: duplicates share one slot in the
    // set, so the set never reaches the row count and toggle_all keeps
    // selecting instead of clearing.
    let rows = vec![json!({"id": "dup"}), json!({"id": "dup"}), json!({"id": "x"})];
    let identified = assign_identities(&rows, Some(&by_id()));

    let once = toggle_all(&identified, &Selection::new());
    assert_eq!(once.selection.len(), 2);
    assert_eq!(once.selected_rows.len(), 3);
    assert!(!all_selected(&identified, &once.selection));

    let twice = toggle_all(&identified, &once.selection);
    assert_eq!(twice.selection, once.selection);

    let one = toggle_one(&identified, &Selection::new(), "dup");
    assert_eq!(one.selected_rows.len(), 2);
}

// ============================================================================
// toggle_one
// ============================================================================

#[test]
fn test_toggle_one_adds_and_reports() {
    let rows = users();
    let identified = assign_identities(&rows, Some(&by_id()));
    let outcome = toggle_one(&identified, &Selection::from_ids(["u3"]), "u1");

    assert!(outcome.selection.is_selected("u1"));
    assert_eq!(row_ids(&outcome.selected_rows), vec!["u1", "u3"]);
}

#[test]
fn test_toggle_one_is_an_involution() {
    let rows = users();
    let identified = assign_identities(&rows, Some(&by_id()));
    let start = Selection::from_ids(["u2"]);
    for id in ["u1", "u2", "u3"] {
        let once = toggle_one(&identified, &start, id);
        let twice = toggle_one(&identified, &once.selection, id);
        assert_eq!(twice.selection, start);
    }
}

#[test]
fn test_toggle_one_unknown_id_is_tracked_but_not_reported() {
    let rows = users();
    let identified = assign_identities(&rows, Some(&by_id()));
    let outcome = toggle_one(&identified, &Selection::new(), "ghost");

    assert!(outcome.selection.is_selected("ghost"));
    assert!(outcome.selected_rows.is_empty());
}

// ============================================================================
// Derived report
// ============================================================================

#[test]
fn test_report_follows_row_changes() {
    let rows = users();
    let identified = assign_identities(&rows, Some(&by_id()));
    let selection = toggle_all(&identified, &Selection::new()).selection;

    let remaining = vec![rows[2].clone(), rows[0].clone()];
    let identified = assign_identities(&remaining, Some(&by_id()));

    assert_eq!(row_ids(&selected_rows(&identified, &selection)), vec!["u3", "u1"]);
    assert!(!all_selected(&identified, &selection));
}

#[test]
fn test_report_matches_membership() {
    let rows = users();
    let identified = assign_identities(&rows, Some(&by_id()));
    let selection = Selection::from_ids(["u2", "u3", "zzz"]);

    let expected: Vec<&Value> = identified
        .iter()
        .filter(|r| selection.is_selected(&r.id))
        .map(|r| r.row)
        .collect();
    assert_eq!(selected_rows(&identified, &selection), expected);
}
