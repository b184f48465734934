use log::warn;
use web_sys::Element;

use tessera::{ComponentError, TemplateProvider};

use crate::helpers::document;

/// Replaces the container's content with the named fragment skeleton
/// and returns the container for scoped element lookups.
///
/// A missing container or an unavailable fragment is logged here, so
/// page-level callers can skip the component and keep going.
pub async fn mount_fragment(
    provider: &dyn TemplateProvider,
    container_id: &str,
    fragment: &str,
) -> Result<Element, ComponentError> {
    let document = document()?;
    let container = match document.get_element_by_id(container_id) {
        Some(container) => container,
        None => {
            warn!("container '{}' not found, skipping {}", container_id, fragment);
            return Err(ComponentError::MissingContainer(
                container_id.to_string(),
            ));
        }
    };
    let html = match provider.fragment_html(fragment).await {
        Ok(html) => html,
        Err(error) => {
            warn!("fragment '{}' unavailable: {}", fragment, error);
            return Err(error);
        }
    };
    container.set_inner_html(&html);
    Ok(container)
}
