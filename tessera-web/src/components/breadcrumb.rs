use tessera::{
    breadcrumb, ComponentError, TemplateProvider, FRAGMENT_BREADCRUMB,
};

use crate::helpers::js_error;
use crate::mount::mount_fragment;

pub const DEFAULT_CONTAINER: &str = "breadcrumb-container";

/// Where the breadcrumb goes and what it shows. When `items` is `None`
/// the trail is read from the container's `data-breadcrumb` attribute.
pub struct BreadcrumbSpec {
    pub container_id: String,
    pub items: Option<String>,
}

impl Default for BreadcrumbSpec {
    fn default() -> Self {
        BreadcrumbSpec {
            container_id: DEFAULT_CONTAINER.to_string(),
            items: None,
        }
    }
}

/// Mounts the breadcrumb trail. Items are pipe-separated; every item
/// except the last renders as a link.
pub async fn init_breadcrumb(
    provider: &dyn TemplateProvider,
    container_id: &str,
    items: Option<&str>,
) -> Result<(), ComponentError> {
    let container =
        mount_fragment(provider, container_id, FRAGMENT_BREADCRUMB).await?;
    let trail = match items {
        Some(items) => items.to_string(),
        None => container
            .get_attribute("data-breadcrumb")
            .unwrap_or_default(),
    };
    let parsed = breadcrumb::split_items(&trail);
    if parsed.is_empty() {
        return Ok(());
    }
    if let Some(content) = container
        .query_selector("#breadcrumb-content")
        .map_err(js_error)?
    {
        content.set_inner_html(&breadcrumb::markup(&parsed));
    }
    Ok(())
}
