use crate::domain::model::Pagination;

/// Page counts up to this size are listed in full.
const FULL_LIST_MAX: i64 = 7;
/// While the current page is at or below this, the leading pages are shown.
const LEADING_EDGE: i64 = 4;
/// Pages shown in a leading or trailing run.
const EDGE_RUN: i64 = 5;

impl Pagination {
    /// Computes the page window for `current_page` out of `total_pages`.
    ///
    /// `current_page` is not validated. Values outside `1..=total_pages`
    /// fall into the leading or trailing window, so `page_numbers` stays
    /// strictly increasing and within range either way.
    pub fn new(current_page: i64, total_pages: i64) -> Self {
        let mut page_numbers = Vec::with_capacity(total_pages.clamp(0, FULL_LIST_MAX) as usize);

        if total_pages <= FULL_LIST_MAX {
            page_numbers.extend(1..=total_pages);
        } else if current_page <= LEADING_EDGE {
            page_numbers.extend(1..=EDGE_RUN);
            page_numbers.push(total_pages);
        } else if current_page >= total_pages - 3 {
            page_numbers.push(1);
            page_numbers.extend(total_pages - (EDGE_RUN - 1)..=total_pages);
        } else {
            page_numbers.push(1);
            page_numbers.extend(current_page - 1..=current_page + 1);
            page_numbers.push(total_pages);
        }

        Self {
            current_page,
            total_pages,
            page_numbers,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn previous_page(&self) -> Option<i64> {
        self.has_previous().then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<i64> {
        self.has_next().then(|| self.current_page + 1)
    }

    /// Whether an ellipsis belongs before the entry at `index`.
    pub fn gap_before(&self, index: usize) -> bool {
        match (index.checked_sub(1), self.page_numbers.get(index)) {
            (Some(prev), Some(page)) => page - self.page_numbers[prev] > 1,
            _ => false,
        }
    }

    pub fn is_current(&self, page: i64) -> bool {
        page == self.current_page
    }
}
