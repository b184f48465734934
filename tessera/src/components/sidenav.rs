use serde::{Deserialize, Serialize};

/// One entry of the side navigation: a link, a titled group of links, or
/// a horizontal divider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavEntry {
    Item(NavItem),
    Group(NavGroup),
    Divider,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(default)]
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub submenu: Vec<NavItem>,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        NavItem {
            id: id.into(),
            label: label.into(),
            ..NavItem::default()
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_submenu(mut self, submenu: Vec<NavItem>) -> Self {
        self.submenu = submenu;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavGroup {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// Renders the nav content. `active_index` addresses an entry by
/// position: `"2"` for a top-level item, `"2-1"` for an item inside the
/// group at position 2. An item's own `active` flag also marks it.
pub fn markup(entries: &[NavEntry], active_index: &str) -> String {
    let mut html = String::new();
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            NavEntry::Divider => {
                html.push_str("<div class=\"sidenav-divider\"></div>");
            }
            NavEntry::Group(group) => {
                html.push_str("<div class=\"sidenav-group\">");
                if let Some(title) = &group.title {
                    html.push_str(&format!(
                        "<div class=\"sidenav-group-title\">{}</div>",
                        title
                    ));
                }
                for (sub_index, item) in group.items.iter().enumerate() {
                    let nav_index = format!("{}-{}", index, sub_index);
                    html.push_str(&item_markup(
                        item,
                        &nav_index,
                        active_index,
                    ));
                }
                html.push_str("</div>");
            }
            NavEntry::Item(item) => {
                let nav_index = index.to_string();
                html.push_str(&item_markup(item, &nav_index, active_index));
            }
        }
    }
    html
}

fn item_markup(
    item: &NavItem,
    nav_index: &str,
    active_index: &str,
) -> String {
    let active = item.active || nav_index == active_index;
    let class = if active {
        "sidenav-item active"
    } else {
        "sidenav-item"
    };
    let icon = match &item.icon {
        Some(icon) => format!("<i class=\"{}\"></i>", icon),
        None => String::new(),
    };
    let badge = match &item.badge {
        Some(badge) => {
            format!("<span class=\"sidenav-badge\">{}</span>", badge)
        }
        None => String::new(),
    };
    let expand = if item.submenu.is_empty() {
        ""
    } else {
        "<i class=\"fas fa-chevron-right sidenav-item-expand\"></i>"
    };

    let mut html = format!(
        "<a href=\"{}\" class=\"{}\" data-nav-id=\"{}\" \
         data-nav-index=\"{}\">{}<span \
         class=\"sidenav-item-text\">{}</span>{}{}</a>",
        item.href.as_deref().unwrap_or("#"),
        class,
        item.id,
        nav_index,
        icon,
        item.label,
        badge,
        expand
    );
    if !item.submenu.is_empty() {
        html.push_str("<div class=\"sidenav-submenu\">");
        for sub in &item.submenu {
            html.push_str(&submenu_item_markup(sub));
        }
        html.push_str("</div>");
    }
    html
}

fn submenu_item_markup(item: &NavItem) -> String {
    let class = if item.active {
        "sidenav-item active"
    } else {
        "sidenav-item"
    };
    format!(
        "<a href=\"{}\" class=\"{}\" data-nav-id=\"{}\"><i \
         class=\"{}\"></i><span \
         class=\"sidenav-item-text\">{}</span></a>",
        item.href.as_deref().unwrap_or("#"),
        class,
        item.id,
        item.icon.as_deref().unwrap_or("fas fa-circle"),
        item.label
    )
}
