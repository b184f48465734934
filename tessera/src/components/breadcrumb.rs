/// Splits a pipe-delimited breadcrumb definition ("Home|CRM|Accounts").
/// An empty definition yields no items.
pub fn split_items(data: &str) -> Vec<&str> {
    if data.is_empty() {
        Vec::new()
    } else {
        data.split('|').collect()
    }
}

/// Every item but the last renders as a link followed by a separator;
/// the last is plain text.
pub fn markup(items: &[&str]) -> String {
    let mut html = String::new();
    for (index, item) in items.iter().enumerate() {
        if index + 1 == items.len() {
            html.push_str(item);
        } else {
            html.push_str(&format!(
                "<a href=\"#\">{}</a> \
                 <span class=\"breadcrumb-separator\">/</span> ",
                item
            ));
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_pipes() {
        assert_eq!(split_items("Home|CRM|Accounts"), [
            "Home", "CRM", "Accounts"
        ]);
        assert_eq!(split_items("Home"), ["Home"]);
        assert!(split_items("").is_empty());
    }

    #[test]
    fn last_item_is_plain_text() {
        let html = markup(&["Home", "CRM", "Accounts"]);
        assert!(html.contains("<a href=\"#\">Home</a>"));
        assert!(html.contains("<a href=\"#\">CRM</a>"));
        assert!(!html.contains("<a href=\"#\">Accounts</a>"));
        assert!(html.ends_with("Accounts"));
        assert_eq!(
            html.matches("<span class=\"breadcrumb-separator\">/</span>")
                .count(),
            2
        );
    }

    #[test]
    fn single_item_has_no_separator() {
        let html = markup(&["Home"]);
        assert_eq!(html, "Home");
    }

    #[test]
    fn no_items_renders_nothing() {
        assert_eq!(markup(&[]), "");
    }
}
