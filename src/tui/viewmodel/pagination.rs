//! Page arithmetic and the page-number control bar.
//!
//! Everything here is a pure function of the filtered length and the current
//! page. The bar is rebuilt from scratch on every render as a list of
//! [`PageControl`]s, each carrying the [`Action`] a click on it triggers.

use crate::tui::action::Action;
use std::ops::Range;

/// Products per page.
pub const PAGE_SIZE: usize = 9;

/// Maximum number of consecutive page numbers in the sliding window.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Number of pages needed for `len` items. Zero items means zero pages.
#[must_use]
pub const fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Index range of the items shown on `page` (1-indexed), truncated at `len`.
#[must_use]
pub fn page_range(len: usize, page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(len);
    let end = start.saturating_add(PAGE_SIZE).min(len);
    start..end
}

/// First and last page number of the sliding window (inclusive).
///
/// Returns `(1, 0)` when there are no pages.
#[must_use]
pub const fn page_window(current: usize, page_count: usize) -> (usize, usize) {
    if page_count <= MAX_VISIBLE_PAGES {
        return (1, page_count);
    }
    let half = MAX_VISIBLE_PAGES / 2;
    if current <= half {
        (1, MAX_VISIBLE_PAGES)
    } else if current >= page_count - half {
        (page_count - MAX_VISIBLE_PAGES + 1, page_count)
    } else {
        (current - half, current + half)
    }
}

/// One element of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Prev { disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { disabled: bool },
}

impl PageControl {
    /// Text shown for the control.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Prev { .. } => "« Prev".to_string(),
            Self::Page { number, .. } => number.to_string(),
            Self::Ellipsis => "...".to_string(),
            Self::Next { .. } => "Next »".to_string(),
        }
    }

    /// Action triggered by clicking the control; `None` for disabled
    /// buttons and ellipses.
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        match *self {
            Self::Prev { disabled: false } => Some(Action::PrevPage),
            Self::Next { disabled: false } => Some(Action::NextPage),
            Self::Page { number, .. } => Some(Action::GoToPage(number)),
            Self::Prev { disabled: true } | Self::Next { disabled: true } | Self::Ellipsis => None,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Page { active: true, .. })
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(
            self,
            Self::Prev { disabled: true } | Self::Next { disabled: true }
        )
    }
}

/// Build the pagination bar for `current` out of `page_count` pages.
///
/// With one page or fewer the bar is empty.
#[must_use]
pub fn page_controls(current: usize, page_count: usize) -> Vec<PageControl> {
    if page_count <= 1 {
        return Vec::new();
    }

    let (start, end) = page_window(current, page_count);
    let mut controls = Vec::with_capacity(MAX_VISIBLE_PAGES + 6);

    controls.push(PageControl::Prev {
        disabled: current == 1,
    });

    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    controls.extend((start..=end).map(|number| PageControl::Page {
        number,
        active: number == current,
    }));

    if end < page_count {
        if end < page_count - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: page_count,
            active: false,
        });
    }

    controls.push(PageControl::Next {
        disabled: current == page_count,
    });

    controls
}
