use wasm_bindgen::closure::Closure;
use web_sys::Event;

use tessera::{tabs, ComponentError, TemplateProvider, FRAGMENT_TABS};

use crate::helpers::{
    closest, event_target_element, js_error, remove_class_all, DomListener,
};
use crate::mount::mount_fragment;

pub const DEFAULT_CONTAINER: &str = "tabs-container";

pub struct TabsConfig {
    pub container_id: String,
    /// Tab labels. When empty the container's `data-tabs` attribute is
    /// split on `|` instead.
    pub tabs: Vec<String>,
    pub active_index: usize,
    pub has_breadcrumb: bool,
    pub on_change: Option<Box<dyn Fn(usize, &str)>>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        TabsConfig {
            container_id: DEFAULT_CONTAINER.to_string(),
            tabs: Vec::new(),
            active_index: 0,
            has_breadcrumb: false,
            on_change: None,
        }
    }
}

/// A mounted tab strip. Dropping the handle detaches its listener.
pub struct Tabs {
    _listener: DomListener,
}

impl Tabs {
    pub fn detach(self) {}
}

/// Mounts the tab strip and dispatches clicks through one delegated
/// listener on the strip itself. Clicking a tab moves the `active`
/// class and reports the index and label to `on_change`.
pub async fn init_tabs(
    provider: &dyn TemplateProvider,
    config: TabsConfig,
) -> Result<Tabs, ComponentError> {
    let container =
        mount_fragment(provider, &config.container_id, FRAGMENT_TABS).await?;

    if let Some(root) = container
        .query_selector(".tabs-container")
        .map_err(js_error)?
    {
        root.class_list()
            .add_1(tabs::position_class(config.has_breadcrumb))
            .map_err(js_error)?;
    }

    let labels = if config.tabs.is_empty() {
        tabs::split_labels(
            &container.get_attribute("data-tabs").unwrap_or_default(),
        )
    } else {
        config.tabs
    };

    let content = container
        .query_selector("#tabs-content")
        .map_err(js_error)?
        .ok_or_else(|| {
            ComponentError::Dom("tabs content region missing".to_string())
        })?;
    content.set_inner_html(&tabs::markup(&labels, config.active_index));

    let on_change = config.on_change;
    let strip = content.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let target = match event_target_element(&event) {
            Some(target) => target,
            None => return,
        };
        let button = match closest(&target, ".tab") {
            Some(button) => button,
            None => return,
        };
        let index = match button
            .get_attribute("data-tab-index")
            .and_then(|value| value.parse::<usize>().ok())
        {
            Some(index) => index,
            None => return,
        };
        remove_class_all(&strip, ".tab", "active");
        let _ = button.class_list().add_1("active");
        if let Some(on_change) = &on_change {
            if let Some(label) = labels.get(index) {
                on_change(index, label);
            }
        }
    });
    let listener = DomListener::attach(&content, "click", callback)?;

    Ok(Tabs {
        _listener: listener,
    })
}
