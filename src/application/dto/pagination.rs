use serde::{Deserialize, Serialize};

/// Page size shared by every feed surface. A fixed system constant, not
/// per-call configuration.
pub const FEED_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPage<T> {
    pub items: Vec<T>,
    /// Length of the full sequence, so callers can render pagination
    /// controls.
    pub total: u64,
    /// The page number as requested, 1-based; out-of-range values are
    /// echoed back unchanged alongside an empty item list.
    pub page: i64,
    /// Always at least 1: page 1 of an empty sequence exists and is empty.
    pub page_count: u64,
}

/// Split an ordered sequence into fixed-size pages. Page numbers are
/// 1-based; a page past the end or ≤ 0 yields an empty page rather than an
/// error, so a stale "next page" link degrades gracefully. Concatenating
/// all pages in order reproduces the sequence exactly.
pub fn paginate<T>(sequence: Vec<T>, page_size: usize, page: i64) -> FeedPage<T> {
    let page_size = page_size.max(1);
    let total = sequence.len() as u64;
    let page_count = total.div_ceil(page_size as u64).max(1);

    let items = if page < 1 {
        Vec::new()
    } else {
        let skip = (page as u64 - 1).saturating_mul(page_size as u64);
        if skip >= total {
            Vec::new()
        } else {
            sequence
                .into_iter()
                .skip(skip as usize)
                .take(page_size)
                .collect()
        }
    };

    FeedPage {
        items,
        total,
        page,
        page_count,
    }
}
