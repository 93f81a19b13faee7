//! Pure page-splitting helpers.

/// Split `items` into bullet-list page descriptions of `per_page` items.
///
/// An empty list yields no pages.
pub fn bulleted_pages(items: &[String], per_page: usize) -> Vec<String> {
    items
        .chunks(per_page.max(1))
        .map(|chunk| format!("- {}", chunk.join("\n- ")))
        .collect()
}
