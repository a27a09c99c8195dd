//! Client-side pagination over the backend's list order.
//!
//! The paginator only windows the collection; it never reorders it. Pages
//! are 1-based and the current page is always kept inside
//! `[1, total_pages]` (or at 1 when there are no items).

use std::ops::Range;

use serde::Serialize;

use crate::errors::CoreError;

/// Records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Pages within this distance of the current page get their own marker.
pub const NEIGHBOR_SPAN: usize = 2;

/// One entry in the pager control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current: usize,
    total_items: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current: 1,
            total_items: 0,
        }
    }
}

impl Paginator {
    /// # Errors
    ///
    /// Returns `CoreError::InvalidValue` when `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self, CoreError> {
        if page_size == 0 {
            return Err(CoreError::InvalidValue {
                field: "page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(Self {
            page_size,
            ..Self::default()
        })
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Record a new collection size and pull the current page back in range.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current = self.current.clamp(1, self.total_pages().max(1));
    }

    /// Move to `page`. Out-of-range requests leave the paginator untouched.
    ///
    /// Returns whether the page was accepted.
    pub fn go_to(&mut self, page: usize) -> bool {
        if (1..=self.total_pages()).contains(&page) {
            self.current = page;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.current > 1 && self.go_to(self.current - 1)
    }

    /// Apply a page number typed by the user.
    ///
    /// The trimmed input must parse as a finite whole number inside
    /// `[1, total_pages]`; anything else is ignored.
    pub fn jump(&mut self, input: &str) -> bool {
        let Ok(value) = input.trim().parse::<f64>() else {
            return false;
        };
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 {
            return false;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let page = value as usize;
        self.go_to(page)
    }

    /// Pager markers: first and last page, the current page's neighbours, and
    /// one ellipsis per collapsed gap.
    #[must_use]
    pub fn markers(&self) -> Vec<PageMarker> {
        let total = self.total_pages();
        let mut markers = Vec::new();
        for page in 1..=total {
            if page == 1 || page == total || page.abs_diff(self.current) <= NEIGHBOR_SPAN {
                markers.push(PageMarker::Page(page));
            } else if markers.last() != Some(&PageMarker::Ellipsis) {
                markers.push(PageMarker::Ellipsis);
            }
        }
        markers
    }

    /// Index range of the current page within the collection.
    #[must_use]
    pub fn window(&self) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// Slice `items` down to the current page.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.window();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}
