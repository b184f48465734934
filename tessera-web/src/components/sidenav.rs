use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};

use tessera::{
    sidenav, ComponentError, NavEntry, TemplateProvider, FRAGMENT_SIDENAV,
};

use crate::helpers::{
    closest, document, event_target_element, js_error, remove_class_all,
    DomListener,
};
use crate::mount::mount_fragment;

pub const DEFAULT_CONTAINER: &str = "sidenav-container";

pub struct SideNavConfig {
    pub container_id: String,
    pub entries: Vec<NavEntry>,
    /// Start in the collapsed (icon-only) state.
    pub collapsed: bool,
    /// Render the collapse toggle button.
    pub toggle_button: bool,
    /// Composite index of the initially active item, e.g. "0" or "2-1".
    pub active_index: String,
    /// Called with the item's composite index, its id and the anchor
    /// element after the active marker has moved.
    pub on_change: Option<Box<dyn Fn(&str, &str, &Element)>>,
}

impl Default for SideNavConfig {
    fn default() -> Self {
        SideNavConfig {
            container_id: DEFAULT_CONTAINER.to_string(),
            entries: Vec::new(),
            collapsed: false,
            toggle_button: true,
            active_index: "0".to_string(),
            on_change: None,
        }
    }
}

/// A mounted side navigation. Dropping the handle detaches all
/// listeners and removes the mobile overlay from the document body.
pub struct SideNav {
    overlay: Element,
    _content_listener: Option<DomListener>,
    _toggle_listener: Option<DomListener>,
    _overlay_listener: DomListener,
}

impl SideNav {
    pub fn detach(self) {}
}

impl Drop for SideNav {
    fn drop(&mut self) {
        self.overlay.remove();
    }
}

pub async fn init_side_nav(
    provider: &dyn TemplateProvider,
    config: SideNavConfig,
) -> Result<SideNav, ComponentError> {
    let container =
        mount_fragment(provider, &config.container_id, FRAGMENT_SIDENAV)
            .await?;
    let root = container
        .query_selector(".sidenav")
        .map_err(js_error)?
        .ok_or_else(|| {
            ComponentError::Dom("sidenav root missing".to_string())
        })?;
    if config.collapsed {
        root.class_list().add_1("collapsed").map_err(js_error)?;
    }

    let toggle_listener = if config.toggle_button {
        Some(attach_collapse_toggle(&root)?)
    } else {
        None
    };

    let content_listener = if config.entries.is_empty() {
        None
    } else {
        let content = container
            .query_selector("#sidenav-content")
            .map_err(js_error)?
            .ok_or_else(|| {
                ComponentError::Dom("sidenav content missing".to_string())
            })?;
        content.set_inner_html(&sidenav::markup(
            &config.entries,
            &config.active_index,
        ));
        Some(attach_item_dispatch(&content, config.on_change)?)
    };

    let (overlay, overlay_listener) = attach_mobile_overlay(&root)?;

    Ok(SideNav {
        overlay,
        _content_listener: content_listener,
        _toggle_listener: toggle_listener,
        _overlay_listener: overlay_listener,
    })
}

/// Flips the mobile drawer open or closed. Pages call this from their
/// own hamburger button.
pub fn toggle_mobile_side_nav(container_id: &str) -> Result<(), ComponentError> {
    let document = document()?;
    let container =
        document.get_element_by_id(container_id).ok_or_else(|| {
            ComponentError::MissingContainer(container_id.to_string())
        })?;
    if let Some(root) = container.query_selector(".sidenav").map_err(js_error)?
    {
        let _ = root.class_list().toggle("mobile-open");
    }
    if let Some(overlay) = document
        .query_selector(".sidenav-overlay")
        .map_err(js_error)?
    {
        let _ = overlay.class_list().toggle("active");
    }
    Ok(())
}

fn attach_collapse_toggle(
    root: &Element,
) -> Result<DomListener, ComponentError> {
    let document = document()?;
    let button = document.create_element("button").map_err(js_error)?;
    button.set_class_name("sidenav-toggle");
    button.set_inner_html("<i class=\"fas fa-chevron-left\"></i>");
    root.append_child(&button).map_err(js_error)?;

    let root = root.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let _ = root.class_list().toggle("collapsed");
        // the page shell shifts its margin with the rail width
        if let Ok(document) = crate::helpers::document() {
            if let Ok(Some(shell)) = document.query_selector(".has-sidenav") {
                let _ = shell.class_list().toggle("sidenav-collapsed");
            }
        }
    });
    DomListener::attach(&button, "click", callback)
}

fn attach_item_dispatch(
    content: &Element,
    on_change: Option<Box<dyn Fn(&str, &str, &Element)>>,
) -> Result<DomListener, ComponentError> {
    let region = content.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let target = match event_target_element(&event) {
            Some(target) => target,
            None => return,
        };
        let item = match closest(&target, ".sidenav-item") {
            Some(item) => item,
            None => return,
        };

        // parent of a submenu toggles expansion instead of activating
        if item
            .query_selector(".sidenav-item-expand")
            .ok()
            .flatten()
            .is_some()
        {
            event.prevent_default();
            let _ = item.class_list().toggle("expanded");
            if let Some(next) = item.next_element_sibling() {
                if next.class_list().contains("sidenav-submenu") {
                    let _ = next.class_list().toggle("expanded");
                }
            }
            return;
        }

        remove_class_all(&region, ".sidenav-item", "active");
        let _ = item.class_list().add_1("active");
        if let Some(on_change) = &on_change {
            let nav_index =
                item.get_attribute("data-nav-index").unwrap_or_default();
            let nav_id =
                item.get_attribute("data-nav-id").unwrap_or_default();
            on_change(&nav_index, &nav_id, &item);
        }
    });
    DomListener::attach(content, "click", callback)
}

fn attach_mobile_overlay(
    root: &Element,
) -> Result<(Element, DomListener), ComponentError> {
    let document = document()?;
    let overlay = document.create_element("div").map_err(js_error)?;
    overlay.set_class_name("sidenav-overlay");
    let body = document
        .body()
        .ok_or_else(|| ComponentError::Dom("no document body".to_string()))?;
    body.append_child(&overlay).map_err(js_error)?;

    let root = root.clone();
    let overlay_for_closure = overlay.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let _ = root.class_list().remove_1("mobile-open");
        let _ = overlay_for_closure.class_list().remove_1("active");
    });
    let listener = DomListener::attach(&overlay, "click", callback)?;
    Ok((overlay, listener))
}
