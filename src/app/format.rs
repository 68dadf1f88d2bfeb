use crate::catalog::{Entry, Listing, Status};

pub(crate) fn truncate(s: &str, max: usize) -> String {
    let mut out = s.to_string();
    if out.chars().count() > max {
        out = out.chars().take(max.saturating_sub(3)).collect::<String>() + "...";
    }
    out
}

pub(crate) fn format_entry(entry: &Entry) -> String {
    format!("{} [{}]", entry.name, entry.status.label())
}

pub(crate) fn format_listing(listing: &Listing<'_>) -> String {
    let mut out = String::new();
    for status in Status::ALL {
        let entries = listing.get(status);
        out.push_str(&format!("--- {} ({}) ---\n", status.label(), entries.len()));
        if entries.is_empty() {
            out.push_str("  (empty)\n");
        }
        for entry in entries {
            out.push_str("  ");
            out.push_str(&entry.name);
            out.push('\n');
        }
    }
    out
}

pub(crate) fn format_sorted_table(entries: &[&Entry]) -> String {
    let mut out = format!("{:<50} {:<10}\n", "TITLE", "STATUS");
    for entry in entries {
        out.push_str(&format!(
            "{:<50} {:<10}\n",
            truncate(&entry.name, 50),
            entry.status.label()
        ));
    }
    out
}
