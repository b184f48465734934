pub mod config;
pub mod render;
pub mod state;

pub use config::{ActionSpec, ActionStyle, CellRender, ColumnKind, ColumnSpec};
pub use render::{
    body_rows, bulk_action_buttons, header_action_buttons, header_row,
    selected_phrase, value_text,
};
pub use state::{Row, TableState};
