use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

use tessera::{
    ComponentError, PageslideOptions, TemplateProvider, FRAGMENT_PAGESLIDE,
};

use crate::helpers::{
    document, event_target_element, js_error, set_timeout, DomListener,
};
use crate::mount::mount_fragment;

pub const DEFAULT_CONTAINER: &str = "pageslide-container";

// panel transition runs 300ms; opening needs one frame with the
// overlay already visible before the slide class lands
const OPEN_DELAY_MS: i32 = 10;
const CLOSE_DELAY_MS: i32 = 300;

/// A mounted slide-over panel. All listeners are attached once at
/// mount; `open` and `close` only move classes and content around.
/// Dropping the handle detaches the listeners.
pub struct Pageslide {
    overlay: Element,
    panel: Element,
    _close_listener: Option<DomListener>,
    _cancel_listener: Option<DomListener>,
    _overlay_listener: DomListener,
    _escape_listener: DomListener,
}

pub async fn init_pageslide(
    provider: &dyn TemplateProvider,
    container_id: &str,
) -> Result<Pageslide, ComponentError> {
    let container =
        mount_fragment(provider, container_id, FRAGMENT_PAGESLIDE).await?;
    let overlay = container
        .query_selector("#pageslide-overlay")
        .map_err(js_error)?
        .ok_or_else(|| {
            ComponentError::Dom("pageslide overlay missing".to_string())
        })?;
    let panel = container
        .query_selector("#pageslide")
        .map_err(js_error)?
        .ok_or_else(|| {
            ComponentError::Dom("pageslide panel missing".to_string())
        })?;

    let close_listener =
        attach_close_button(&container, "#pageslide-close", &overlay, &panel)?;
    let cancel_listener = attach_close_button(
        &container,
        "#pageslide-cancel",
        &overlay,
        &panel,
    )?;
    let overlay_listener = attach_overlay_dismiss(&overlay, &panel)?;
    let escape_listener = attach_escape_dismiss(&overlay, &panel)?;

    Ok(Pageslide {
        overlay,
        panel,
        _close_listener: close_listener,
        _cancel_listener: cancel_listener,
        _overlay_listener: overlay_listener,
        _escape_listener: escape_listener,
    })
}

impl Pageslide {
    /// Fills in whatever `options` carries and slides the panel in.
    /// Unset fields keep the panel's current content, so the skeleton's
    /// default footer survives until a caller replaces it.
    pub fn open(
        &self,
        options: &PageslideOptions,
    ) -> Result<(), ComponentError> {
        if let Some(title) = &options.title {
            if let Some(node) = self
                .panel
                .query_selector("#pageslide-title")
                .map_err(js_error)?
            {
                node.set_text_content(Some(title));
            }
        }
        if let Some(content) = &options.content {
            if let Some(body) = self
                .panel
                .query_selector("#pageslide-body")
                .map_err(js_error)?
            {
                body.set_inner_html(content);
            }
        }
        if let Some(footer) = &options.footer {
            if let Some(region) = self
                .panel
                .query_selector("#pageslide-footer")
                .map_err(js_error)?
            {
                region.set_inner_html(footer);
            }
        }
        if let Some(size) = options.size {
            self.panel
                .set_attribute("data-pageslide-size", size.token())
                .map_err(js_error)?;
        }
        open_panels(&self.overlay, &self.panel)
    }

    pub fn close(&self) -> Result<(), ComponentError> {
        close_panels(&self.overlay, &self.panel)
    }

    pub fn is_open(&self) -> bool {
        self.overlay.class_list().contains("active")
    }

    pub fn detach(self) {}
}

fn open_panels(
    overlay: &Element,
    panel: &Element,
) -> Result<(), ComponentError> {
    set_body_overflow("hidden");
    let _ = overlay.class_list().add_1("active");
    let panel = panel.clone();
    set_timeout(
        move || {
            let _ = panel.class_list().add_1("active");
        },
        OPEN_DELAY_MS,
    )
}

fn close_panels(
    overlay: &Element,
    panel: &Element,
) -> Result<(), ComponentError> {
    let _ = panel.class_list().remove_1("active");
    let overlay = overlay.clone();
    set_timeout(
        move || {
            let _ = overlay.class_list().remove_1("active");
            set_body_overflow("");
        },
        CLOSE_DELAY_MS,
    )
}

fn set_body_overflow(value: &str) {
    if let Ok(document) = document() {
        if let Some(body) = document.body() {
            let _ = body.style().set_property("overflow", value);
        }
    }
}

fn attach_close_button(
    container: &Element,
    selector: &str,
    overlay: &Element,
    panel: &Element,
) -> Result<Option<DomListener>, ComponentError> {
    let button = match container.query_selector(selector).map_err(js_error)? {
        Some(button) => button,
        None => return Ok(None),
    };
    let overlay = overlay.clone();
    let panel = panel.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let _ = close_panels(&overlay, &panel);
    });
    Ok(Some(DomListener::attach(&button, "click", callback)?))
}

fn attach_overlay_dismiss(
    overlay: &Element,
    panel: &Element,
) -> Result<DomListener, ComponentError> {
    let overlay_for_closure = overlay.clone();
    let panel = panel.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        // only a click on the backdrop itself dismisses
        let target = match event_target_element(&event) {
            Some(target) => target,
            None => return,
        };
        if target != overlay_for_closure {
            return;
        }
        let _ = close_panels(&overlay_for_closure, &panel);
    });
    DomListener::attach(overlay, "click", callback)
}

fn attach_escape_dismiss(
    overlay: &Element,
    panel: &Element,
) -> Result<DomListener, ComponentError> {
    let document = document()?;
    let overlay = overlay.clone();
    let panel = panel.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let key_event = match event.dyn_ref::<KeyboardEvent>() {
            Some(key_event) => key_event,
            None => return,
        };
        if key_event.key() != "Escape"
            || !overlay.class_list().contains("active")
        {
            return;
        }
        let _ = close_panels(&overlay, &panel);
    });
    DomListener::attach(&document, "keydown", callback)
}
