#[cfg(target_arch = "wasm32")]
mod fetch_wasm32;

use async_trait::async_trait;

#[cfg(target_arch = "wasm32")]
pub use fetch_wasm32::FetchProvider;

use crate::ComponentError;

pub const FRAGMENT_APP_HEADER: &str = "app-header";
pub const FRAGMENT_BREADCRUMB: &str = "breadcrumb";
pub const FRAGMENT_PAGE_HEADER: &str = "page-header";
pub const FRAGMENT_TABS: &str = "tabs";
pub const FRAGMENT_SIDENAV: &str = "sidenav";
pub const FRAGMENT_PAGESLIDE: &str = "pageslide";
pub const FRAGMENT_DATA_TABLE: &str = "data-table";

/// Base path the fetch backend resolves fragments against,
/// i.e. `components/<name>.html`.
pub const DEFAULT_TEMPLATE_BASE: &str = "components";

pub const FRAGMENT_NAMES: &[&str] = &[
    FRAGMENT_APP_HEADER,
    FRAGMENT_BREADCRUMB,
    FRAGMENT_PAGE_HEADER,
    FRAGMENT_TABS,
    FRAGMENT_SIDENAV,
    FRAGMENT_PAGESLIDE,
    FRAGMENT_DATA_TABLE,
];

/// Resolves a fragment name to its HTML skeleton.
///
/// Implemented by the embedded catalog and by the fetch backend; mounting
/// code depends only on this trait so the two stay interchangeable.
#[async_trait(?Send)]
pub trait TemplateProvider {
    async fn fragment_html(&self, name: &str)
        -> Result<String, ComponentError>;
}

fn builtin(name: &str) -> Option<&'static str> {
    match name {
        FRAGMENT_APP_HEADER => Some(include_str!("html/app-header.html")),
        FRAGMENT_BREADCRUMB => Some(include_str!("html/breadcrumb.html")),
        FRAGMENT_PAGE_HEADER => Some(include_str!("html/page-header.html")),
        FRAGMENT_TABS => Some(include_str!("html/tabs.html")),
        FRAGMENT_SIDENAV => Some(include_str!("html/sidenav.html")),
        FRAGMENT_PAGESLIDE => Some(include_str!("html/pageslide.html")),
        FRAGMENT_DATA_TABLE => Some(include_str!("html/data-table.html")),
        _ => None,
    }
}

/// Backend that resolves fragments from the compiled-in catalog. Cannot
/// fail except on an unrecognized name.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedProvider;

impl EmbeddedProvider {
    pub fn new() -> Self {
        EmbeddedProvider
    }
}

#[async_trait(?Send)]
impl TemplateProvider for EmbeddedProvider {
    async fn fragment_html(
        &self,
        name: &str,
    ) -> Result<String, ComponentError> {
        builtin(name)
            .map(str::to_owned)
            .ok_or_else(|| ComponentError::UnknownFragment(name.to_owned()))
    }
}
