use serde::{Deserialize, Serialize};

/// Colored pill next to the page title; `color` is a palette name the
/// stylesheet resolves (`bg-{color}-100 text-{color}-800`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    pub color: String,
}

impl Badge {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Badge {
            text: text.into(),
            color: color.into(),
        }
    }
}

pub fn badge_markup(badge: &Badge) -> String {
    format!(
        "<span class=\"inline-flex items-center px-2 py-0.5 rounded-full \
         text-sm font-medium bg-{color}-100 text-{color}-800\">{}</span>",
        badge.text,
        color = badge.color
    )
}

/// Inner markup of the title section: title, optional badge row,
/// optional subtitle line.
pub fn title_markup(
    title: &str,
    badges: &[Badge],
    subtitle: Option<&str>,
) -> String {
    let heading = format!("<h1 class=\"page-title mr-0\">{}</h1>", title);
    let mut html = if badges.is_empty() {
        heading
    } else {
        let badges_html: String = badges.iter().map(badge_markup).collect();
        format!(
            "<div class=\"title-with-badges\">{}<div \
             class=\"badges-container\">{}</div></div>",
            heading, badges_html
        )
    };
    if let Some(subtitle) = subtitle {
        html.push_str(&format!(
            "<div class=\"flex items-center gap-2 text-muted \
             text-sm\">{}</div>",
            subtitle
        ));
    }
    html
}

/// Root class depending on whether a breadcrumb sits above the header.
pub fn position_class(has_breadcrumb: bool) -> &'static str {
    if has_breadcrumb {
        "with-breadcrumb"
    } else {
        "no-breadcrumb"
    }
}
