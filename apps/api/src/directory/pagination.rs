use serde::Serialize;

use crate::directory::filter::{ExperienceBracket, FilterState, ProfessionFilter};

/// Chefs per page (4 rows of 3 cards).
pub const PAGE_SIZE: usize = 12;
/// Up to this many pages every page number is listed; beyond it, ellipses appear.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
    /// 1-indexed position of the first item on this page ("Showing 13-24 of 30").
    pub range_start: usize,
    pub range_end: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

/// Slices `items` to the requested 1-indexed page.
///
/// The page is not clamped: a page past the end yields no items while
/// `total_pages` still reports the real count.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total = items.len();
    let total_pages = total_pages(total, page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total);
    let slice = if start < total { items[start..end].to_vec() } else { Vec::new() };

    Page {
        range_start: if slice.is_empty() { 0 } else { start + 1 },
        range_end: if slice.is_empty() { 0 } else { end },
        items: slice,
        page,
        total,
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
    }
}

/// An entry in the page-number control.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageItem {
    Page(usize),
    EllipsisStart,
    EllipsisEnd,
}

/// Compact page-number list: first, neighbours of `current`, last, with ellipses for gaps.
pub fn page_items(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    if current > 3 {
        items.push(PageItem::EllipsisStart);
    }

    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total_pages - 1);
    items.extend(
        (start..=end)
            .filter(|&n| n != 1 && n != total_pages)
            .map(PageItem::Page),
    );

    if current < total_pages.saturating_sub(2) {
        items.push(PageItem::EllipsisEnd);
    }
    if total_pages > 1 {
        items.push(PageItem::Page(total_pages));
    }
    items
}

/// Immutable snapshot of everything the viewer has selected.
///
/// Changing any filter yields a new snapshot back on page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    pub filters: FilterState,
    pub page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            page: 1,
        }
    }
}

impl BrowseState {
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            filters: FilterState {
                query: query.into(),
                ..self.filters
            },
            page: 1,
        }
    }

    pub fn with_experience(self, experience: ExperienceBracket) -> Self {
        Self {
            filters: FilterState {
                experience,
                ..self.filters
            },
            page: 1,
        }
    }

    pub fn with_profession(self, profession: ProfessionFilter) -> Self {
        Self {
            filters: FilterState {
                profession,
                ..self.filters
            },
            page: 1,
        }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    pub fn cleared(self) -> Self {
        Self::default()
    }
}
