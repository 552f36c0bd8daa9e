//! Page/limit arithmetic for list endpoints.
//!
//! Query strings are parsed leniently: anything that is absent, not a
//! positive integer, or otherwise unusable falls back to the default
//! instead of failing the request.

/// Page used when none (or an invalid one) is supplied.
pub const DEFAULT_PAGE: i64 = 1;

/// Rows per page used when no (or an invalid) limit is supplied.
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on rows per page.
pub const MAX_LIMIT: i64 = 100;

/// A resolved page request (1-based page, rows per page).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Resolve raw `page` / `limit` query values.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(limit)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        Self { page, limit }
    }

    /// Number of rows skipped before this page: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`; zero rows means zero pages.
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            return 0;
        }
        (total + self.limit - 1) / self.limit
    }

    /// 1-based row number of the `index`-th row on this page.
    pub fn row_number(&self, index: usize) -> i64 {
        self.offset() + index as i64 + 1
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        assert_eq!(PageRequest::from_raw(None, None), PageRequest::default());
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let req = PageRequest::from_raw(Some("abc"), Some("-5"));
        assert_eq!(req.page, DEFAULT_PAGE);
        assert_eq!(req.limit, DEFAULT_LIMIT);

        let req = PageRequest::from_raw(Some("0"), Some("0"));
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn limit_is_capped() {
        let req = PageRequest::from_raw(Some("2"), Some("5000"));
        assert_eq!(req.page, 2);
        assert_eq!(req.limit, MAX_LIMIT);
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        for page in 1..=20 {
            for limit in 1..=15 {
                let req = PageRequest { page, limit };
                assert_eq!(req.offset(), (page - 1) * limit);
            }
        }
    }

    #[test]
    fn total_pages_is_ceiling() {
        let req = PageRequest { page: 1, limit: 10 };
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.total_pages(1), 1);
        assert_eq!(req.total_pages(10), 1);
        assert_eq!(req.total_pages(11), 2);
        assert_eq!(req.total_pages(3), 1);
    }

    #[test]
    fn pages_partition_the_full_set() {
        let total = 37_i64;
        let limit = 6;
        let req = PageRequest { page: 1, limit };
        let mut seen = Vec::new();
        for page in 1..=req.total_pages(total) {
            let req = PageRequest { page, limit };
            let start = req.offset();
            let end = (start + limit).min(total);
            seen.extend(start..end);
        }
        assert_eq!(seen, (0..total).collect::<Vec<_>>());
    }

    #[test]
    fn row_numbers_continue_across_pages() {
        let req = PageRequest { page: 3, limit: 10 };
        assert_eq!(req.row_number(0), 21);
        assert_eq!(req.row_number(9), 30);
    }
}
