//! Fixed-size pagination of browse listings.

use serde::Serialize;
use std::ops::Range;

use crate::error::LinkError;

/// Entries per page when the config does not say otherwise.
pub const DEFAULT_PER_PAGE: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// 1-based current page.
    pub number: usize,
    pub num_pages: usize,
    pub per_page: usize,
    pub total: usize,
}

impl Pagination {
    /// Index range of the current page within the full listing.
    pub fn range(&self) -> Range<usize> {
        let start = (self.number - 1) * self.per_page;
        start..(start + self.per_page).min(self.total)
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

/// Validates the raw page parameter against `total` entries.
///
/// Absent or blank means page 1. An empty listing still has one (empty) page.
pub fn paginate(total: usize, raw: Option<&str>, per_page: usize) -> Result<Pagination, LinkError> {
    let per_page = per_page.max(1);
    let num_pages = total.div_ceil(per_page).max(1);

    let number = match raw.map(str::trim) {
        None | Some("") => 1,
        Some(s) => match s.parse::<usize>() {
            Ok(n) if (1..=num_pages).contains(&n) => n,
            _ => return Err(LinkError::InvalidPageNumber(s.to_string())),
        },
    };

    Ok(Pagination {
        number,
        num_pages,
        per_page,
        total,
    })
}
