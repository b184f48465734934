use serde_json::Value;

use super::state::Row;

/// Custom cell renderer: receives the cell value (`Null` when the row has
/// no entry for the column key) and the whole row, returns markup.
pub type CellRender = Box<dyn Fn(&Value, &Row) -> String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    #[default]
    Normal,
    Checkbox,
    Actions,
}

impl ColumnKind {
    /// Unrecognized tokens fall back to `Normal`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "checkbox" => ColumnKind::Checkbox,
            "actions" => ColumnKind::Actions,
            _ => ColumnKind::Normal,
        }
    }
}

/// One column of a data table. Column identity is its position in the
/// configured sequence; keys may repeat and are absent on checkbox and
/// actions columns.
pub struct ColumnSpec {
    pub key: Option<String>,
    pub label: String,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub render: Option<CellRender>,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        ColumnSpec {
            key: Some(key.into()),
            label: label.into(),
            kind: ColumnKind::Normal,
            sortable: true,
            render: None,
        }
    }

    pub fn checkbox() -> Self {
        ColumnSpec {
            key: None,
            label: String::new(),
            kind: ColumnKind::Checkbox,
            sortable: false,
            render: None,
        }
    }

    /// Contextual-actions column; an empty label renders as "Actions".
    pub fn actions(label: impl Into<String>) -> Self {
        ColumnSpec {
            key: None,
            label: label.into(),
            kind: ColumnKind::Actions,
            sortable: false,
            render: None,
        }
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn with_render(
        mut self,
        render: impl Fn(&Value, &Row) -> String + 'static,
    ) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Search only inspects regular data columns.
    pub fn is_searchable(&self) -> bool {
        self.kind == ColumnKind::Normal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStyle {
    #[default]
    Default,
    Primary,
    LightDanger,
}

impl ActionStyle {
    pub fn button_class(&self) -> &'static str {
        match self {
            ActionStyle::Default => "btn btn-light",
            ActionStyle::Primary => "btn btn-primary",
            ActionStyle::LightDanger => "btn btn-light text-danger",
        }
    }
}

/// Header or bulk action shown as a button; `style` only affects bulk
/// buttons, header buttons always render with the light class.
#[derive(Debug, Clone)]
pub struct ActionSpec {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub style: ActionStyle,
}

impl ActionSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        ActionSpec {
            id: id.into(),
            label: label.into(),
            icon: None,
            style: ActionStyle::Default,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_style(mut self, style: ActionStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_column_token_falls_back_to_normal() {
        assert_eq!(ColumnKind::from_token("checkbox"), ColumnKind::Checkbox);
        assert_eq!(ColumnKind::from_token("actions"), ColumnKind::Actions);
        assert_eq!(ColumnKind::from_token("normal"), ColumnKind::Normal);
        assert_eq!(ColumnKind::from_token("sparkline"), ColumnKind::Normal);
        assert_eq!(ColumnKind::from_token(""), ColumnKind::Normal);
    }

    #[test]
    fn column_defaults() {
        let col = ColumnSpec::new("name", "Name");
        assert_eq!(col.kind, ColumnKind::Normal);
        assert!(col.sortable);
        assert!(col.is_searchable());

        let checkbox = ColumnSpec::checkbox();
        assert_eq!(checkbox.kind, ColumnKind::Checkbox);
        assert!(checkbox.key.is_none());
        assert!(!checkbox.is_searchable());

        let actions = ColumnSpec::actions("");
        assert_eq!(actions.kind, ColumnKind::Actions);
        assert!(!actions.is_searchable());
    }

    #[test]
    fn action_style_button_classes() {
        let cases = [
            (ActionStyle::Default, "btn btn-light"),
            (ActionStyle::Primary, "btn btn-primary"),
            (ActionStyle::LightDanger, "btn btn-light text-danger"),
        ];
        for (style, expected) in cases {
            assert_eq!(style.button_class(), expected);
        }
    }
}
