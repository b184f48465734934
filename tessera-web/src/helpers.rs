use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget};

use tessera::ComponentError;

pub(crate) fn document() -> Result<web_sys::Document, ComponentError> {
    let window = web_sys::window().ok_or("No window available")?;
    window.document().ok_or_else(|| "No document available".into())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn js_error(error: JsValue) -> ComponentError {
    ComponentError::Js(error)
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn js_error(error: JsValue) -> ComponentError {
    ComponentError::Dom(format!("{:?}", error))
}

pub(crate) fn event_target_element(event: &Event) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
}

pub(crate) fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

pub(crate) fn remove_class_all(root: &Element, selector: &str, class: &str) {
    let nodes = match root.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(_) => return,
    };
    for index in 0..nodes.length() {
        if let Some(node) = nodes.item(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                let _ = element.class_list().remove_1(class);
            }
        }
    }
}

/// Schedules a one-shot callback on the window timer.
pub(crate) fn set_timeout(
    callback: impl FnOnce() + 'static,
    millis: i32,
) -> Result<(), ComponentError> {
    let window = web_sys::window().ok_or("No window available")?;
    let handler = Closure::once_into_js(callback);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            handler.unchecked_ref(),
            millis,
        )
        .map_err(js_error)?;
    Ok(())
}

/// An event listener bound to a DOM target. The listener is removed
/// again when the handle is dropped, so component handles can offer
/// explicit teardown by simply owning their hooks.
pub(crate) struct DomListener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    pub(crate) fn attach<T>(
        target: &T,
        kind: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<DomListener, ComponentError>
    where
        T: AsRef<EventTarget>,
    {
        let target = target.as_ref().clone();
        target
            .add_event_listener_with_callback(
                kind,
                callback.as_ref().unchecked_ref(),
            )
            .map_err(js_error)?;
        Ok(DomListener {
            target,
            kind,
            callback,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.kind,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
