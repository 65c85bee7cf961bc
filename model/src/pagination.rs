//! Page-based pagination primitives for listing endpoints.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Default page size when the caller does not specify one
pub const DEFAULT_PER_PAGE: u32 = 15;
/// Upper bound on caller-specified page sizes
pub const MAX_PER_PAGE: u32 = 100;

/// Sort direction for listing queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Desc
    }
}

/// A value which cannot be converted into a [SortDirection]
#[derive(Debug, thiserror::Error)]
#[error("Invalid sort direction: {0}")]
pub struct InvalidSortDirection(String);

impl FromStr for SortDirection {
    type Err = InvalidSortDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(InvalidSortDirection(s.to_string()))
        }
    }
}

/// Validated paging window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
}

impl PageParams {
    /// Clamp raw caller input into a valid window: page at least 1,
    /// page size between 1 and [MAX_PER_PAGE], defaulting to
    /// [DEFAULT_PER_PAGE]
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        PageParams {
            page: page.unwrap_or(1).max(1),
            per_page: per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        }
    }

    /// Row offset for this window
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }

    /// Row limit for this window
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        PageParams::new(None, None)
    }
}

/// One page of results plus the paging meta clients need to render controls
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Paginated<T> {
    /// The rows on this page
    pub items: Vec<T>,
    /// 1-based page number
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
    /// Total matching rows across all pages
    pub total: u64,
    /// Total pages, at least 1
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Assemble a page from fetched rows and the query's total count
    pub fn new(items: Vec<T>, params: PageParams, total: u64) -> Self {
        Paginated {
            items,
            page: params.page,
            per_page: params.per_page,
            total,
            total_pages: total.div_ceil(u64::from(params.per_page)).max(1),
        }
    }

    /// Convert the item type while keeping the paging meta
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_default_and_clamp() {
        let defaults = PageParams::new(None, None);
        assert_eq!(defaults.page, 1);
        assert_eq!(defaults.per_page, DEFAULT_PER_PAGE);

        let clamped = PageParams::new(Some(0), Some(10_000));
        assert_eq!(clamped.page, 1);
        assert_eq!(clamped.per_page, MAX_PER_PAGE);

        let floor = PageParams::new(Some(3), Some(0));
        assert_eq!(floor.page, 3);
        assert_eq!(floor.per_page, 1);
    }

    #[test]
    fn offset_reflects_the_page_window() {
        let params = PageParams::new(Some(3), Some(20));
        assert_eq!(params.offset(), 40);
        assert_eq!(params.limit(), 20);
    }

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        let params = PageParams::new(Some(1), Some(15));
        assert_eq!(Paginated::<u8>::new(vec![], params, 0).total_pages, 1);
        assert_eq!(Paginated::<u8>::new(vec![], params, 15).total_pages, 1);
        assert_eq!(Paginated::<u8>::new(vec![], params, 16).total_pages, 2);
        assert_eq!(Paginated::<u8>::new(vec![], params, 45).total_pages, 3);
    }

    #[test]
    fn sort_direction_parses_case_insensitively() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn map_preserves_paging_meta() {
        let params = PageParams::new(Some(2), Some(2));
        let page = Paginated::new(vec![1, 2], params, 5).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
    }
}
