/// One page of an ordered result
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_items: usize,
    /// Always at least 1: an empty result is a single empty page
    pub total_pages: usize,
    pub current_page: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl<T> Page<'_, T> {
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// Number of pages needed for `total_items`, never less than 1
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1)).max(1)
}

/// Slice out 1-indexed `page`. Zero page or page size is clamped to 1, and a
/// page past the end yields an empty slice with both indices at the end.
pub fn paginate<T>(items: &[T], page: usize, items_per_page: usize) -> Page<'_, T> {
    let page = page.max(1);
    let per_page = items_per_page.max(1);
    let count = items.len();

    let start_index = (page - 1).saturating_mul(per_page).min(count);
    let end_index = start_index.saturating_add(per_page).min(count);

    Page {
        items: &items[start_index..end_index],
        total_items: count,
        total_pages: total_pages(count, per_page),
        current_page: page,
        start_index,
        end_index,
    }
}
