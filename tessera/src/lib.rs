pub(crate) mod components;
pub(crate) mod error;
pub(crate) mod table;
pub(crate) mod templates;

// note - do not rely on these staying exposed as part of the API
// see external module for parts that are meant to be the stable API
pub use error::ComponentError;
pub use table::{Row, TableState};
pub use templates::{EmbeddedProvider, TemplateProvider};

// meant for external use by the web crate or third-party apps
pub mod external {
    pub use crate::components::{
        breadcrumb, page_header, pageslide, sidenav, tabs, Badge, NavEntry,
        NavGroup, NavItem, PageslideOptions, PanelSize,
    };
    pub use crate::error::ComponentError;
    pub use crate::table::{
        body_rows, bulk_action_buttons, header_action_buttons, header_row,
        selected_phrase, value_text, ActionSpec, ActionStyle, CellRender,
        ColumnKind, ColumnSpec, Row, TableState,
    };
    #[cfg(target_arch = "wasm32")]
    pub use crate::templates::FetchProvider;
    pub use crate::templates::{
        EmbeddedProvider, TemplateProvider, DEFAULT_TEMPLATE_BASE,
        FRAGMENT_APP_HEADER, FRAGMENT_BREADCRUMB, FRAGMENT_DATA_TABLE,
        FRAGMENT_NAMES, FRAGMENT_PAGESLIDE, FRAGMENT_PAGE_HEADER,
        FRAGMENT_SIDENAV, FRAGMENT_TABS,
    };
}
pub use external::*;
