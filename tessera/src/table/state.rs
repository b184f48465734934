use std::collections::BTreeSet;

use super::config::ColumnSpec;
use super::render::value_text;

/// One table row: an open-ended mapping from column key to value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Owned state of one table instance.
///
/// `visible` holds indices into `full`, in original relative order.
/// `selected` holds indices into the visible sequence and is cleared
/// whenever the visible sequence is recomputed; stale indices would
/// otherwise point at rows of a previous view.
pub struct TableState {
    full: Vec<Row>,
    visible: Vec<usize>,
    selected: BTreeSet<usize>,
}

impl TableState {
    pub fn new(rows: Vec<Row>) -> Self {
        let visible = (0..rows.len()).collect();
        TableState {
            full: rows,
            visible,
            selected: BTreeSet::new(),
        }
    }

    pub fn full_len(&self) -> usize {
        self.full.len()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.visible.iter().map(|index| &self.full[*index])
    }

    pub fn visible_row(&self, index: usize) -> Option<&Row> {
        self.visible.get(index).map(|full_index| &self.full[*full_index])
    }

    /// Recomputes the visible sequence from the query. A row stays
    /// visible when any searchable column value, lower-cased, contains
    /// the lower-cased query; an empty query keeps every row. Always
    /// clears the selection.
    pub fn apply_filter(&mut self, query: &str, columns: &[ColumnSpec]) {
        let needle = query.to_lowercase();
        self.visible = self
            .full
            .iter()
            .enumerate()
            .filter(|(_, row)| row_matches(row, columns, &needle))
            .map(|(index, _)| index)
            .collect();
        self.selected.clear();
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) {
        if index >= self.visible.len() {
            return;
        }
        if selected {
            self.selected.insert(index);
        } else {
            self.selected.remove(&index);
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn select_all(&mut self) {
        self.selected = (0..self.visible.len()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// True iff every visible row is selected and at least one exists.
    pub fn all_selected(&self) -> bool {
        !self.visible.is_empty() && self.selected.len() == self.visible.len()
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    /// Rows a bulk action operates on, resolved from the full dataset by
    /// the raw selected indices.
    pub fn selected_rows(&self) -> Vec<&Row> {
        self.selected
            .iter()
            .filter_map(|index| self.full.get(*index))
            .collect()
    }
}

fn row_matches(row: &Row, columns: &[ColumnSpec], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    columns.iter().filter(|col| col.is_searchable()).any(|col| {
        col.key.as_deref().map_or(false, |key| {
            value_text(row.get(key)).to_lowercase().contains(needle)
        })
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::table::config::ColumnKind;

    fn person(name: &str, company: &str) -> Row {
        let mut row = Row::new();
        row.insert("name".to_string(), json!(name));
        row.insert("company".to_string(), json!(company));
        row
    }

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::checkbox(),
            ColumnSpec::new("name", "Name"),
            ColumnSpec::new("company", "Company"),
            ColumnSpec::actions(""),
        ]
    }

    fn sample_state() -> TableState {
        TableState::new(vec![
            person("Alice", "Initech"),
            person("Bob", "Globex"),
            person("Carol", "Initech"),
        ])
    }

    #[test]
    fn new_state_shows_every_row() {
        let state = sample_state();
        assert_eq!(state.full_len(), 3);
        assert_eq!(state.visible_len(), 3);
        assert!(!state.has_selection());
        assert!(!state.all_selected());
    }

    #[test]
    fn empty_dataset_is_valid() {
        let state = TableState::new(Vec::new());
        assert_eq!(state.visible_len(), 0);
        assert!(!state.all_selected());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut state = sample_state();
        state.apply_filter("INIT", &columns());
        assert_eq!(state.visible_len(), 2);
        let names: Vec<String> = state
            .visible_rows()
            .map(|row| value_text(row.get("name")))
            .collect();
        assert_eq!(names, ["Alice", "Carol"]);
    }

    #[test]
    fn empty_query_restores_every_row() {
        let mut state = sample_state();
        state.apply_filter("bob", &columns());
        assert_eq!(state.visible_len(), 1);
        state.apply_filter("", &columns());
        assert_eq!(state.visible_len(), 3);
    }

    #[test]
    fn filter_only_inspects_searchable_columns() {
        let mut state = sample_state();
        // same key, but reachable through a checkbox column only
        let cols = vec![ColumnSpec {
            key: Some("name".to_string()),
            label: String::new(),
            kind: ColumnKind::Checkbox,
            sortable: false,
            render: None,
        }];
        state.apply_filter("alice", &cols);
        assert_eq!(state.visible_len(), 0);
    }

    #[test]
    fn filter_clears_selection() {
        let mut state = sample_state();
        state.select_all();
        assert!(state.all_selected());
        state.apply_filter("alice", &columns());
        assert!(!state.has_selection());
        assert_eq!(state.visible_len(), 1);
    }

    #[test]
    fn selection_tracks_toggles() {
        let mut state = sample_state();
        state.set_selected(0, true);
        state.set_selected(2, true);
        assert_eq!(state.selected_count(), 2);
        assert!(!state.all_selected());
        state.set_selected(1, true);
        assert!(state.all_selected());
        state.set_selected(2, false);
        assert!(!state.all_selected());
        assert_eq!(state.selected_indices(), [0, 1]);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut state = sample_state();
        state.set_selected(7, true);
        assert!(!state.has_selection());
    }

    #[test]
    fn selected_rows_resolve_from_full_dataset() {
        let mut state = sample_state();
        state.set_selected(0, true);
        state.set_selected(1, true);
        let rows = state.selected_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(value_text(rows[0].get("name")), "Alice");
        assert_eq!(value_text(rows[1].get("name")), "Bob");
    }
}
