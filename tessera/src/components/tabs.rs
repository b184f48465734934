/// Splits a pipe-delimited tab definition, dropping empty entries.
pub fn split_labels(data: &str) -> Vec<String> {
    data.split('|')
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect()
}

/// One button per label; the active tab carries the `active` class and
/// every tab exposes its index for dispatch.
pub fn markup(labels: &[String], active_index: usize) -> String {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let class = if index == active_index {
                "tab active"
            } else {
                "tab"
            };
            format!(
                "<button class=\"{}\" data-tab-index=\"{}\">{}</button>",
                class, index, label
            )
        })
        .collect()
}

/// Root class that keeps the tab strip sticky below the page header,
/// offset for an optional breadcrumb row.
pub fn position_class(has_breadcrumb: bool) -> &'static str {
    if has_breadcrumb {
        "sticky-with-breadcrumb"
    } else {
        "sticky-no-breadcrumb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_empty_entries() {
        assert_eq!(split_labels("One|Two|Three"), ["One", "Two", "Three"]);
        assert_eq!(split_labels("One||Two|"), ["One", "Two"]);
        assert!(split_labels("").is_empty());
    }

    #[test]
    fn active_tab_is_marked() {
        let labels =
            vec!["Overview".to_string(), "Contacts".to_string()];
        let html = markup(&labels, 1);
        assert!(html.contains(
            "<button class=\"tab\" data-tab-index=\"0\">Overview</button>"
        ));
        assert!(html.contains(
            "<button class=\"tab active\" \
             data-tab-index=\"1\">Contacts</button>"
        ));
    }

    #[test]
    fn out_of_range_active_index_marks_nothing() {
        let labels = vec!["Only".to_string()];
        assert!(!markup(&labels, 5).contains("active"));
    }
}
