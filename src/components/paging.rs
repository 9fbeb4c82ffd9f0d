use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// Page-based window over a filtered list. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page_size: usize,
    pub current_page: usize,
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    ((total + page_size - 1) / page_size).max(1)
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.page_size)
    }

    pub fn clamped(self, total: usize) -> Self {
        Self {
            current_page: self.current_page.clamp(1, self.total_pages(total)),
            ..self
        }
    }

    pub fn reset(self) -> Self {
        Self {
            current_page: 1,
            ..self
        }
    }

    pub fn go_to(self, page: usize, total: usize) -> Self {
        Self {
            current_page: page,
            ..self
        }
        .clamped(total)
    }

    pub fn next(self, total: usize) -> Self {
        self.go_to(self.current_page + 1, total)
    }

    pub fn previous(self, total: usize) -> Self {
        self.go_to(self.current_page.saturating_sub(1), total)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.current_page < self.total_pages(total)
    }

    /// Whether the pager controls are worth showing at all.
    pub fn is_needed(&self, total: usize) -> bool {
        total > self.page_size
    }

    pub fn page_range(&self, total: usize) -> Range<usize> {
        let page = self.current_page.clamp(1, self.total_pages(total));
        let start = ((page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.page_range(items.len())]
    }
}

/// First, last, and up to `window` pages on each side of `current`, with
/// gaps wherever pages are skipped.
pub fn page_strip(current: usize, total_pages: usize, window: usize) -> Vec<PageItem> {
    if total_pages <= 2 * window + 3 {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total_pages);
    let start = current.saturating_sub(window).max(2);
    let end = (current + window).min(total_pages - 1);

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Gap);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total_pages - 1 {
        items.push(PageItem::Gap);
    }
    items.push(PageItem::Page(total_pages));
    items
}
