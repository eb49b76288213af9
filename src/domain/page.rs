use serde::Serialize;

/// Number of products shown per page.
pub const PAGE_SIZE: usize = 20;

/// One page of a paginated sequence along with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Items visible on this page.
    pub items: Vec<T>,
    /// 1-based page number actually served (after clamping).
    pub page: usize,
    /// Page size used to slice the sequence.
    pub per_page: usize,
    /// Number of items across every page.
    pub total_items: usize,
    /// Number of pages, never less than 1.
    pub total_pages: usize,
}

/// Number of pages needed for `total_items`, with an empty list still having one page.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1)).max(1)
}

/// Clamp a requested page into `1..=total_pages`.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

impl<T: Clone> Page<T> {
    /// Slice `items` into the requested page of size `per_page`.
    pub fn slice(items: &[T], requested: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_pages(total_items, per_page);
        let page = clamp_page(requested, total_pages);

        let start = (page - 1) * per_page;
        let end = (start + per_page).min(total_items);
        let items = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

        Self {
            items,
            page,
            per_page,
            total_items,
            total_pages,
        }
    }
}

impl<T> Page<T> {
    /// Convert every item while keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
