use tessera::{
    page_header, Badge, ComponentError, TemplateProvider,
    FRAGMENT_PAGE_HEADER,
};

use crate::helpers::js_error;
use crate::mount::mount_fragment;

pub const DEFAULT_CONTAINER: &str = "page-header-container";

pub struct PageHeaderConfig {
    pub container_id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub badges: Vec<Badge>,
    /// Pre-rendered markup for the actions region, left empty to keep
    /// whatever the skeleton ships.
    pub actions_html: String,
    /// Adjusts the sticky offset when a breadcrumb sits above.
    pub has_breadcrumb: bool,
}

impl Default for PageHeaderConfig {
    fn default() -> Self {
        PageHeaderConfig {
            container_id: DEFAULT_CONTAINER.to_string(),
            title: "Page Title".to_string(),
            subtitle: None,
            badges: Vec::new(),
            actions_html: String::new(),
            has_breadcrumb: false,
        }
    }
}

pub async fn init_page_header(
    provider: &dyn TemplateProvider,
    config: &PageHeaderConfig,
) -> Result<(), ComponentError> {
    let container =
        mount_fragment(provider, &config.container_id, FRAGMENT_PAGE_HEADER)
            .await?;

    if let Some(root) =
        container.query_selector(".page-header").map_err(js_error)?
    {
        root.class_list()
            .add_1(page_header::position_class(config.has_breadcrumb))
            .map_err(js_error)?;
    }
    if let Some(title_section) = container
        .query_selector("#page-header-title")
        .map_err(js_error)?
    {
        title_section.set_inner_html(&page_header::title_markup(
            &config.title,
            &config.badges,
            config.subtitle.as_deref(),
        ));
    }
    if !config.actions_html.is_empty() {
        if let Some(actions) = container
            .query_selector("#page-header-actions")
            .map_err(js_error)?
        {
            actions.set_inner_html(&config.actions_html);
        }
    }
    Ok(())
}
