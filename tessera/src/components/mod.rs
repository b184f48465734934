pub mod breadcrumb;
pub mod page_header;
pub mod pageslide;
pub mod sidenav;
pub mod tabs;

pub use page_header::Badge;
pub use pageslide::{PageslideOptions, PanelSize};
pub use sidenav::{NavEntry, NavGroup, NavItem};
