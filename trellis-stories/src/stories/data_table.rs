use std::sync::Arc;

use serde::Deserialize;
use trellis::prelude::*;

use super::table_story;
use crate::registration::StoryRegistration;

const TITLE: &str = "Data Display/DataTable";

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct User {
    id: String,
    name: String,
    email: String,
    age: Option<u32>,
}

impl Record for User {
    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "age" => Some(self.age.into()),
            _ => None,
        }
    }
}

fn users() -> Vec<User> {
    serde_json::from_str(include_str!("../../fixtures/users.json")).unwrap_or_else(|e| {
        log::error!("bad user fixture: {}", e);
        Vec::new()
    })
}

fn columns(sortable: bool) -> Vec<Column<User>> {
    let cols = vec![
        Column::new("Name", Accessor::field("name")).id("name"),
        Column::new("Email", Accessor::field("email")).id("email"),
        Column::new("Age", Accessor::field("age")).id("age").fixed(5),
    ];
    if sortable {
        cols.into_iter().map(Column::sortable).collect()
    } else {
        cols
    }
}

fn by_user_id() -> RowIdFn<User> {
    Arc::new(|user: &User, _: usize| user.id.clone())
}

fn basic() -> Vec<String> {
    table_story(&DataTable::with_rows(columns(false), users()))
}

fn sortable() -> Vec<String> {
    let mut table = DataTable::with_rows(columns(true), users());
    let mut lines = vec!["click Name:".to_string()];

    table.on_header_click("name");
    lines.extend(table_story(&table));

    lines.push(String::new());
    lines.push("click Name again:".to_string());
    table.on_header_click("name");
    lines.extend(table_story(&table));

    lines
}

fn selectable() -> Vec<String> {
    let mut table = DataTable::with_rows(columns(false), users())
        .row_id(by_user_id())
        .selectable(true);

    let mut lines = table_story(&table);
    if let EventResult::Emit(TableEvent::SelectionChanged(rows)) = table.toggle_row("u2") {
        let names: Vec<_> = rows.iter().map(|u| u.name.as_str()).collect();
        lines.push(String::new());
        lines.push(format!("selection changed: {}", names.join(", ")));
    }
    lines.extend(table_story(&table));
    lines
}

fn derived() -> Vec<String> {
    let columns = vec![
        Column::new("Name", Accessor::field("name")).sortable(),
        Column::new(
            "Handle",
            Accessor::derive(|u: &User| {
                u.email.split('@').next().unwrap_or_default().to_string()
            }),
        )
        .id("handle"),
        Column::new("Age", Accessor::field("age"))
            .id("age")
            .cell(|value: &CellValue, _: &User| match value {
                CellValue::Null => "n/a".to_string(),
                v => format!("{} yrs", v),
            }),
    ];
    table_story(&DataTable::with_rows(columns, users()))
}

fn loading() -> Vec<String> {
    table_story(&DataTable::with_rows(columns(true), Vec::new()).loading(true))
}

fn empty() -> Vec<String> {
    table_story(&DataTable::with_rows(columns(false), Vec::<User>::new()))
}

fn empty_custom_message() -> Vec<String> {
    table_story(
        &DataTable::with_rows(columns(false), Vec::<User>::new())
            .selectable(true)
            .empty_message("No users match this filter."),
    )
}

inventory::submit! { StoryRegistration::new(TITLE, "Basic", basic) }
inventory::submit! { StoryRegistration::new(TITLE, "Sortable", sortable) }
inventory::submit! { StoryRegistration::new(TITLE, "Selectable", selectable) }
inventory::submit! { StoryRegistration::new(TITLE, "Derived", derived) }
inventory::submit! { StoryRegistration::new(TITLE, "Loading", loading) }
inventory::submit! { StoryRegistration::new(TITLE, "Empty", empty) }
inventory::submit! { StoryRegistration::new(TITLE, "Empty With Message", empty_custom_message) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_loads() {
        let users = users();
        assert_eq!(users.len(), 4);
        assert_eq!(users[3].age, None);
    }

    #[test]
    fn test_sortable_orders_case_insensitively() {
        let lines = sortable();
        let names: Vec<_> = lines
            .iter()
            .filter_map(|l| l.split(" │ ").next())
            .map(str::trim)
            .filter(|n| ["Bhavesh Kumar", "Chaman", "dana Ruiz", "Mohit Kumar"].contains(n))
            .collect();
        assert_eq!(
            names,
            vec![
                "Bhavesh Kumar",
                "Chaman",
                "dana Ruiz",
                "Mohit Kumar",
                "Mohit Kumar",
                "dana Ruiz",
                "Chaman",
                "Bhavesh Kumar",
            ]
        );
    }

    #[test]
    fn test_selectable_reports_selected_user() {
        let lines = selectable();
        assert!(lines.contains(&"selection changed: Bhavesh Kumar".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("[x] │ Bhavesh Kumar")));
    }

    #[test]
    fn test_derived_cells() {
        let lines = derived();
        assert!(lines.iter().any(|l| l.contains("mohit") && l.contains("21 yrs")));
        assert!(lines.iter().any(|l| l.contains("n/a")));
    }

    #[test]
    fn test_loading_has_no_empty_message() {
        let lines = loading();
        assert_eq!(lines.last().map(String::as_str), Some("⟳ Loading…"));
        assert!(!lines.iter().any(|l| l.contains(trellis::table::DEFAULT_EMPTY_MESSAGE)));
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(empty().last().map(String::as_str), Some("No data to display."));
        assert_eq!(
            empty_custom_message().last().map(String::as_str),
            Some("No users match this filter.")
        );
    }
}
