pub(crate) mod helpers;

pub mod components;
pub mod mount;

pub use components::app_header::init_app_header;
pub use components::breadcrumb::{init_breadcrumb, BreadcrumbSpec};
pub use components::page_header::{init_page_header, PageHeaderConfig};
pub use components::pageslide::{init_pageslide, Pageslide};
pub use components::sidenav::{
    init_side_nav, toggle_mobile_side_nav, SideNav, SideNavConfig,
};
pub use components::table::{
    init_data_table, BulkAction, DataTable, HeaderAction, TableConfig,
};
pub use components::tabs::{init_tabs, Tabs, TabsConfig};
pub use components::{init_all, PageConfig, PageHandles};
pub use mount::mount_fragment;
