use serde::Serialize;
use time::OffsetDateTime;

use crate::Posting;

/// Best-available recency key: `posted_at`, falling back to `inserted_at`.
/// `None` sorts as the oldest possible value.
fn recency(p: &Posting) -> Option<OffsetDateTime> {
    p.posted_at.or(p.inserted_at)
}

/// Order the collection newest first. Stable, so ties keep input order.
pub fn sort_by_recency(postings: &[Posting]) -> Vec<&Posting> {
    let mut out: Vec<&Posting> = postings.iter().collect();
    out.sort_by(|a, b| recency(b).cmp(&recency(a)));
    out
}

/// The derived pagination state handed to the UI: `visible` is a contiguous
/// ascending run of page indices that always contains `current_page` while
/// `total_pages > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub visible: Vec<usize>,
}

pub fn total_pages(result_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    result_count.div_ceil(page_size)
}

/// Fixed-size window of page numbers centered on `current`, shifted to stay
/// inside `[0, total)`. All pages are shown when they fit in the window.
pub fn page_window(current: usize, total: usize, window: usize) -> Vec<usize> {
    if total == 0 || window == 0 {
        return Vec::new();
    }
    let len = window.min(total);
    let start = current.saturating_sub(window / 2).min(total - len);
    (start..start + len).collect()
}

/// The `[page * page_size, (page + 1) * page_size)` slice, clamped to the
/// item count. Out-of-range pages yield an empty slice rather than a panic.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
