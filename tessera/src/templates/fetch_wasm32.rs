use async_trait::async_trait;
use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::{TemplateProvider, DEFAULT_TEMPLATE_BASE};
use crate::ComponentError;

/// Backend that fetches fragments from `<base>/<name>.html` at call time.
pub struct FetchProvider {
    base: String,
}

impl FetchProvider {
    pub fn new(base: impl Into<String>) -> Self {
        FetchProvider { base: base.into() }
    }

    fn fragment_url(&self, name: &str) -> String {
        format!("{}/{}.html", self.base.trim_end_matches('/'), name)
    }
}

impl Default for FetchProvider {
    fn default() -> Self {
        FetchProvider::new(DEFAULT_TEMPLATE_BASE)
    }
}

#[async_trait(?Send)]
impl TemplateProvider for FetchProvider {
    async fn fragment_html(
        &self,
        name: &str,
    ) -> Result<String, ComponentError> {
        let url = self.fragment_url(name);
        debug!("fetching fragment: {}", url);
        let window = web_sys::window().ok_or("No window available")?;

        let request_init = RequestInit::new();
        request_init.set_method("GET");
        request_init.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&url, &request_init)?;
        let response_js =
            JsFuture::from(window.fetch_with_request(&request)).await?;
        let response: Response = response_js.dyn_into()?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(ComponentError::Fetch(format!(
                "{} returned status {}",
                url, status
            )));
        }

        let body_promise: js_sys::Promise = response.text()?;
        let body_js = JsFuture::from(body_promise).await?;
        Ok(body_js.as_string().unwrap_or_default())
    }
}
