use serde_json::Value;

use super::config::{ActionSpec, ColumnKind, ColumnSpec};
use super::state::{Row, TableState};

/// Display text of one cell value. Missing values and nulls render
/// empty; strings render verbatim, everything else via its JSON form.
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Header cells, one `<th>` per column in configured order.
pub fn header_row(columns: &[ColumnSpec]) -> String {
    let mut html = String::new();
    for col in columns {
        match col.kind {
            ColumnKind::Checkbox => {
                html.push_str(
                    "<th class=\"checkbox-col\"><input type=\"checkbox\" \
                     class=\"table-checkbox select-all-checkbox\" \
                     id=\"select-all-checkbox\"></th>",
                );
            }
            ColumnKind::Actions => {
                let label = if col.label.is_empty() {
                    "Actions"
                } else {
                    &col.label
                };
                html.push_str(&format!(
                    "<th class=\"actions-col\">{}</th>",
                    label
                ));
            }
            ColumnKind::Normal => {
                let class = if col.sortable { "sortable" } else { "" };
                html.push_str(&format!(
                    "<th class=\"{}\" data-column=\"{}\">{}</th>",
                    class,
                    col.key.as_deref().unwrap_or(""),
                    col.label
                ));
            }
        }
    }
    html
}

/// Body rows for the current visible sequence; row checkboxes carry the
/// checked attribute of the selection set so the body is a pure function
/// of table state.
pub fn body_rows(columns: &[ColumnSpec], state: &TableState) -> String {
    let mut html = String::new();
    for (index, row) in state.visible_rows().enumerate() {
        html.push_str(&format!("<tr data-row-index=\"{}\">", index));
        for col in columns {
            html.push_str(&cell(col, row, index, state.is_selected(index)));
        }
        html.push_str("</tr>");
    }
    html
}

fn cell(col: &ColumnSpec, row: &Row, index: usize, selected: bool) -> String {
    match col.kind {
        ColumnKind::Checkbox => format!(
            "<td class=\"checkbox-col\"><input type=\"checkbox\" \
             class=\"table-checkbox row-checkbox\" \
             data-row-index=\"{}\"{}></td>",
            index,
            if selected { " checked" } else { "" }
        ),
        ColumnKind::Actions => format!(
            "<td class=\"actions-col\"><button class=\"actions-menu-btn\" \
             data-row-index=\"{}\"><i class=\"fas fa-ellipsis-v\"></i>\
             </button></td>",
            index
        ),
        ColumnKind::Normal => {
            let value = col.key.as_deref().and_then(|key| row.get(key));
            let content = match &col.render {
                Some(render) => render(value.unwrap_or(&Value::Null), row),
                None => value_text(value),
            };
            format!("<td>{}</td>", content)
        }
    }
}

/// Always-visible actions in the header-right region.
pub fn header_action_buttons(actions: &[ActionSpec]) -> String {
    actions
        .iter()
        .map(|action| action_button(action, "btn btn-light"))
        .collect()
}

/// Selection-scoped actions inside the bulk bar, styled per action.
pub fn bulk_action_buttons(actions: &[ActionSpec]) -> String {
    actions
        .iter()
        .map(|action| action_button(action, action.style.button_class()))
        .collect()
}

fn action_button(action: &ActionSpec, class: &str) -> String {
    let icon = match &action.icon {
        Some(icon) => format!("<i class=\"{}\"></i>", icon),
        None => String::new(),
    };
    format!(
        "<button class=\"{}\" data-action=\"{}\">{}<span>{}</span></button>",
        class, action.id, icon, action.label
    )
}

/// "k item selected" / "k items selected" for the bulk overlay.
pub fn selected_phrase(count: usize) -> String {
    if count == 1 {
        "1 item selected".to_string()
    } else {
        format!("{} items selected", count)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::table::config::ActionStyle;

    fn row(name: &str, amount: i64) -> Row {
        let mut row = Row::new();
        row.insert("name".to_string(), json!(name));
        row.insert("amount".to_string(), json!(amount));
        row
    }

    #[test]
    fn header_row_renders_each_column_kind() {
        let columns = vec![
            ColumnSpec::checkbox(),
            ColumnSpec::new("name", "Name"),
            ColumnSpec::new("amount", "Amount").with_sortable(false),
            ColumnSpec::actions(""),
        ];
        let html = header_row(&columns);
        assert!(html.contains("select-all-checkbox"));
        assert!(html.contains(
            "<th class=\"sortable\" data-column=\"name\">Name</th>"
        ));
        assert!(html
            .contains("<th class=\"\" data-column=\"amount\">Amount</th>"));
        assert!(html.contains("<th class=\"actions-col\">Actions</th>"));
    }

    #[test]
    fn actions_header_keeps_explicit_label() {
        let columns = vec![ColumnSpec::actions("Manage")];
        assert!(header_row(&columns)
            .contains("<th class=\"actions-col\">Manage</th>"));
    }

    #[test]
    fn body_rows_render_values_and_markers() {
        let columns = vec![
            ColumnSpec::checkbox(),
            ColumnSpec::new("name", "Name"),
            ColumnSpec::actions(""),
        ];
        let state = TableState::new(vec![row("Alice", 10), row("Bob", 20)]);
        let html = body_rows(&columns, &state);
        assert_eq!(html.matches("<tr data-row-index=").count(), 2);
        assert!(html.contains("<td>Alice</td>"));
        assert!(html.contains("<td>Bob</td>"));
        assert!(html.contains("actions-menu-btn"));
        assert!(html.contains("fa-ellipsis-v"));
        assert!(!html.contains("checked"));
    }

    #[test]
    fn selected_rows_render_checked_checkboxes() {
        let columns =
            vec![ColumnSpec::checkbox(), ColumnSpec::new("name", "Name")];
        let mut state =
            TableState::new(vec![row("Alice", 10), row("Bob", 20)]);
        state.set_selected(1, true);
        let html = body_rows(&columns, &state);
        assert!(html.contains("data-row-index=\"1\" checked"));
        assert!(!html.contains("data-row-index=\"0\" checked"));
    }

    #[test]
    fn custom_render_receives_value_and_row() {
        let columns = vec![ColumnSpec::new("amount", "Amount").with_render(
            |value, row| {
                format!(
                    "{} ({})",
                    value_text(Some(value)),
                    value_text(row.get("name"))
                )
            },
        )];
        let state = TableState::new(vec![row("Alice", 10)]);
        let html = body_rows(&columns, &state);
        assert!(html.contains("<td>10 (Alice)</td>"));
    }

    #[test]
    fn missing_key_renders_empty_cell() {
        let columns = vec![ColumnSpec::new("phone", "Phone")];
        let state = TableState::new(vec![row("Alice", 10)]);
        assert!(body_rows(&columns, &state).contains("<td></td>"));
    }

    #[test]
    fn value_text_conversions() {
        assert_eq!(value_text(None), "");
        assert_eq!(value_text(Some(&Value::Null)), "");
        assert_eq!(value_text(Some(&json!("plain"))), "plain");
        assert_eq!(value_text(Some(&json!(0))), "0");
        assert_eq!(value_text(Some(&json!(12.5))), "12.5");
        assert_eq!(value_text(Some(&json!(true))), "true");
    }

    #[test]
    fn action_buttons_carry_ids_and_classes() {
        let header = vec![
            ActionSpec::new("export", "Export").with_icon("fas fa-download")
        ];
        let html = header_action_buttons(&header);
        assert!(html.contains("data-action=\"export\""));
        assert!(html.contains("class=\"btn btn-light\""));
        assert!(html.contains("<i class=\"fas fa-download\"></i>"));
        assert!(html.contains("<span>Export</span>"));

        let bulk = vec![
            ActionSpec::new("assign", "Assign")
                .with_style(ActionStyle::Primary),
            ActionSpec::new("delete", "Delete")
                .with_style(ActionStyle::LightDanger),
        ];
        let html = bulk_action_buttons(&bulk);
        assert!(html.contains("class=\"btn btn-primary\""));
        assert!(html.contains("class=\"btn btn-light text-danger\""));
    }

    #[test]
    fn selected_phrase_pluralizes() {
        assert_eq!(selected_phrase(1), "1 item selected");
        assert_eq!(selected_phrase(2), "2 items selected");
        assert_eq!(selected_phrase(0), "0 items selected");
    }
}
