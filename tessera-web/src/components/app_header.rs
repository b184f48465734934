use tessera::{ComponentError, TemplateProvider, FRAGMENT_APP_HEADER};

use crate::mount::mount_fragment;

pub const DEFAULT_CONTAINER: &str = "app-header-container";

/// Mounts the shared application header. The skeleton is static, so no
/// listeners are attached and there is nothing to tear down.
pub async fn init_app_header(
    provider: &dyn TemplateProvider,
    container_id: &str,
) -> Result<(), ComponentError> {
    mount_fragment(provider, container_id, FRAGMENT_APP_HEADER).await?;
    Ok(())
}
