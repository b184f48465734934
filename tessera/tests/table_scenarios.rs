use serde_json::json;
use tessera::{
    body_rows, selected_phrase, value_text, ColumnSpec, Row, TableState,
};

fn name_row(name: &str) -> Row {
    let mut row = Row::new();
    row.insert("name".to_string(), json!(name));
    row
}

fn contact_row(name: &str, company: &str, status: &str) -> Row {
    let mut row = Row::new();
    row.insert("name".to_string(), json!(name));
    row.insert("company".to_string(), json!(company));
    row.insert("status".to_string(), json!(status));
    row
}

fn contact_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::checkbox(),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("company", "Company"),
        ColumnSpec::new("status", "Status"),
        ColumnSpec::actions(""),
    ]
}

fn rendered_row_count(columns: &[ColumnSpec], state: &TableState) -> usize {
    body_rows(columns, state).matches("<tr data-row-index=").count()
}

#[test]
fn row_count_and_badge_follow_dataset_length() {
    let columns = contact_columns();
    let state = TableState::new(vec![
        contact_row("Alice", "Initech", "Active"),
        contact_row("Bob", "Globex", "Active"),
        contact_row("Carol", "Initech", "Inactive"),
    ]);
    assert_eq!(rendered_row_count(&columns, &state), 3);
    assert_eq!(state.visible_len(), 3);

    let empty = TableState::new(Vec::new());
    assert_eq!(rendered_row_count(&columns, &empty), 0);
    assert_eq!(empty.visible_len(), 0);
}

#[test]
fn search_narrows_across_data_columns() {
    let columns = contact_columns();
    let mut state = TableState::new(vec![
        contact_row("Alice", "Initech", "Active"),
        contact_row("Bob", "Globex", "Active"),
        contact_row("Carol", "Initech", "Inactive"),
    ]);

    // matches company column, case-insensitively
    state.apply_filter("globex", &columns);
    assert_eq!(state.visible_len(), 1);
    assert_eq!(rendered_row_count(&columns, &state), 1);

    // substring may match several columns of several rows
    state.apply_filter("active", &columns);
    assert_eq!(state.visible_len(), 3);

    state.apply_filter("inactive", &columns);
    assert_eq!(state.visible_len(), 1);

    state.apply_filter("", &columns);
    assert_eq!(state.visible_len(), 3);
}

#[test]
fn select_all_then_narrowing_search_drops_selection() {
    let columns = contact_columns();
    let mut state = TableState::new(vec![
        contact_row("Alice", "Initech", "Active"),
        contact_row("Bob", "Globex", "Active"),
    ]);
    state.select_all();
    assert!(state.all_selected());
    assert_eq!(state.selected_count(), 2);

    state.apply_filter("alice", &columns);
    assert!(!state.has_selection());
    assert_eq!(state.selected_count(), 0);
    assert_eq!(state.visible_len(), 1);
}

#[test]
fn partial_selection_counts_and_phrases() {
    let mut state = TableState::new(vec![
        name_row("Alice"),
        name_row("Bob"),
        name_row("Carol"),
    ]);

    state.set_selected(1, true);
    assert_eq!(state.selected_count(), 1);
    assert_eq!(selected_phrase(state.selected_count()), "1 item selected");
    assert!(!state.all_selected());

    state.set_selected(0, true);
    assert_eq!(
        selected_phrase(state.selected_count()),
        "2 items selected"
    );

    state.set_selected(2, true);
    assert!(state.all_selected());

    state.set_selected(1, false);
    assert!(!state.all_selected());
    assert_eq!(state.selected_indices(), [0, 2]);
}

#[test]
fn bulk_resolution_returns_k_rows_and_indices() {
    let mut state = TableState::new(vec![
        name_row("Alice"),
        name_row("Bob"),
        name_row("Carol"),
        name_row("Dave"),
    ]);
    state.set_selected(0, true);
    state.set_selected(2, true);
    state.set_selected(3, true);

    let indices = state.selected_indices();
    let rows = state.selected_rows();
    assert_eq!(indices.len(), 3);
    assert_eq!(rows.len(), 3);
    assert_eq!(indices, [0, 2, 3]);
    let names: Vec<String> =
        rows.iter().map(|row| value_text(row.get("name"))).collect();
    assert_eq!(names, ["Alice", "Carol", "Dave"]);
}

#[test]
fn round_trip_search_and_reset() {
    let columns = vec![ColumnSpec::new("name", "Name")];
    let mut state =
        TableState::new(vec![name_row("Alice"), name_row("Bob")]);

    assert_eq!(state.visible_len(), 2);
    assert_eq!(rendered_row_count(&columns, &state), 2);

    state.select_all();
    state.apply_filter("ali", &columns);
    assert_eq!(state.visible_len(), 1);
    assert_eq!(rendered_row_count(&columns, &state), 1);
    let html = body_rows(&columns, &state);
    assert!(html.contains("<td>Alice</td>"));
    assert!(!html.contains("<td>Bob</td>"));

    state.apply_filter("", &columns);
    assert_eq!(state.visible_len(), 2);
    assert_eq!(rendered_row_count(&columns, &state), 2);
    assert!(!state.has_selection());
}
