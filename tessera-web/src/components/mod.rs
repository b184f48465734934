use log::debug;

use tessera::TemplateProvider;

pub mod app_header;
pub mod breadcrumb;
pub mod page_header;
pub mod pageslide;
pub mod sidenav;
pub mod table;
pub mod tabs;

use app_header::init_app_header;
use breadcrumb::{init_breadcrumb, BreadcrumbSpec};
use page_header::{init_page_header, PageHeaderConfig};
use pageslide::{init_pageslide, Pageslide};
use sidenav::{init_side_nav, SideNav, SideNavConfig};
use tabs::{init_tabs, Tabs, TabsConfig};

/// Which chrome fragments a page wants. `None` skips the fragment
/// entirely; the data table mounts separately through
/// [`table::init_data_table`].
pub struct PageConfig {
    pub app_header: bool,
    pub breadcrumb: Option<BreadcrumbSpec>,
    pub side_nav: Option<SideNavConfig>,
    pub page_header: Option<PageHeaderConfig>,
    pub tabs: Option<TabsConfig>,
    /// Container id for the slide-over panel.
    pub pageslide: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            app_header: true,
            breadcrumb: None,
            side_nav: None,
            page_header: None,
            tabs: None,
            pageslide: None,
        }
    }
}

/// Handles for the stateful fragments of a page. Dropping the struct
/// tears all of them down.
#[derive(Default)]
pub struct PageHandles {
    pub side_nav: Option<SideNav>,
    pub tabs: Option<Tabs>,
    pub pageslide: Option<Pageslide>,
}

/// Mounts every fragment requested in `config`, in page order: app
/// header, breadcrumb, side navigation, page header, tabs, pageslide.
/// A fragment that fails to mount is skipped so the rest of the page
/// still comes up; the failure is logged where it happened.
pub async fn init_all(
    provider: &dyn TemplateProvider,
    config: PageConfig,
) -> PageHandles {
    let mut handles = PageHandles::default();

    if config.app_header {
        if let Err(error) =
            init_app_header(provider, app_header::DEFAULT_CONTAINER).await
        {
            debug!("app header skipped: {}", error);
        }
    }
    if let Some(spec) = config.breadcrumb {
        if let Err(error) =
            init_breadcrumb(provider, &spec.container_id, spec.items.as_deref())
                .await
        {
            debug!("breadcrumb skipped: {}", error);
        }
    }
    if let Some(side_nav) = config.side_nav {
        match init_side_nav(provider, side_nav).await {
            Ok(handle) => handles.side_nav = Some(handle),
            Err(error) => debug!("side nav skipped: {}", error),
        }
    }
    if let Some(page_header) = config.page_header {
        if let Err(error) = init_page_header(provider, &page_header).await {
            debug!("page header skipped: {}", error);
        }
    }
    if let Some(tabs) = config.tabs {
        match init_tabs(provider, tabs).await {
            Ok(handle) => handles.tabs = Some(handle),
            Err(error) => debug!("tabs skipped: {}", error),
        }
    }
    if let Some(container_id) = config.pageslide {
        match init_pageslide(provider, &container_id).await {
            Ok(handle) => handles.pageslide = Some(handle),
            Err(error) => debug!("pageslide skipped: {}", error),
        }
    }

    handles
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use tessera::{EmbeddedProvider, NavEntry, NavItem};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn stage(id: &str) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(old) = document.get_element_by_id(id) {
            old.remove();
        }
        let container = document.create_element("div").unwrap();
        container.set_id(id);
        document.body().unwrap().append_child(&container).unwrap();
        container
    }

    #[wasm_bindgen_test]
    async fn mounts_requested_fragments_and_skips_missing_containers() {
        let document = web_sys::window().unwrap().document().unwrap();
        // no app header container on purpose; the rest must still mount
        if let Some(old) = document.get_element_by_id("app-header-container")
        {
            old.remove();
        }
        let breadcrumb = stage("all-breadcrumb");
        let side_nav = stage("all-sidenav");
        let page_header = stage("all-page-header");
        let tabs = stage("all-tabs");
        let pageslide = stage("all-pageslide");

        let provider = EmbeddedProvider::new();
        let config = PageConfig {
            app_header: true,
            breadcrumb: Some(BreadcrumbSpec {
                container_id: "all-breadcrumb".to_string(),
                items: Some("Home|Reports".to_string()),
            }),
            side_nav: Some(SideNavConfig {
                container_id: "all-sidenav".to_string(),
                entries: vec![NavEntry::Item(NavItem::new("home", "Home"))],
                ..Default::default()
            }),
            page_header: Some(PageHeaderConfig {
                container_id: "all-page-header".to_string(),
                title: "Reports".to_string(),
                ..Default::default()
            }),
            tabs: Some(TabsConfig {
                container_id: "all-tabs".to_string(),
                tabs: vec!["One".to_string(), "Two".to_string()],
                ..Default::default()
            }),
            pageslide: Some("all-pageslide".to_string()),
        };
        let handles = init_all(&provider, config).await;

        assert!(handles.side_nav.is_some());
        assert!(handles.tabs.is_some());
        assert!(handles.pageslide.is_some());

        assert!(breadcrumb
            .query_selector("#breadcrumb-content a")
            .unwrap()
            .is_some());
        assert!(side_nav
            .query_selector("[data-nav-id='home']")
            .unwrap()
            .is_some());
        assert!(page_header
            .query_selector(".page-header")
            .unwrap()
            .is_some());
        assert_eq!(tabs.query_selector_all(".tab").unwrap().length(), 2);
        assert!(pageslide.query_selector("#pageslide").unwrap().is_some());
    }
}
