use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Page used when `page` is absent or not an integer
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `size` is absent or not an integer
pub const DEFAULT_SIZE: i64 = 100;

/// Parsed paging parameters. Values are not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page: i64,
    pub size: i64,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}

impl Paging {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// Parses raw `page` and `size` values, substituting defaults for
    /// anything missing or unparseable
    pub fn parse(raw_page: Option<&str>, raw_size: Option<&str>) -> Self {
        let page = raw_page
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(DEFAULT_PAGE);
        let size = raw_size
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(DEFAULT_SIZE);
        Self { page, size }
    }

    /// Resolves the `(skip, limit)` window for this page.
    ///
    /// Non-positive pages or sizes, and windows whose offset does not fit in
    /// 64 bits, are rejected as client errors.
    pub fn window(&self) -> AppResult<(u64, u64)> {
        if self.size < 1 {
            return Err(AppError::InvalidInput(
                "size must be a positive integer".to_string(),
            ));
        }
        if self.page < 1 {
            return Err(AppError::InvalidInput(
                "page must be a positive integer".to_string(),
            ));
        }

        let skip = (self.page - 1)
            .checked_mul(self.size)
            .ok_or_else(|| AppError::InvalidInput("page out of range".to_string()))?;

        Ok((skip as u64, self.size as u64))
    }
}

/// Paging metadata rendered next to every list of movie summaries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PagingMeta {
    pub page: i64,
    pub size: i64,
    pub total_page: u64,
    pub total_item: u64,
}

impl PagingMeta {
    /// Builds metadata for a validated page.
    ///
    /// `total_page` is `total_item / size + 1`, so an exact multiple of the
    /// page size reports one trailing empty page. Clients rely on this count.
    pub fn new(paging: Paging, total_item: u64) -> Self {
        let size = paging.size.max(1) as u64;
        Self {
            page: paging.page,
            size: paging.size,
            total_page: total_item / size + 1,
            total_item,
        }
    }
}

/// One page of items together with its paging metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub paging: PagingMeta,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, paging: Paging, total_item: u64) -> Self {
        Self {
            items,
            paging: PagingMeta::new(paging, total_item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_when_absent() {
        assert_eq!(Paging::parse(None, None), Paging::new(1, 100));
    }

    #[test]
    fn test_parse_defaults_on_garbage() {
        assert_eq!(Paging::parse(Some("two"), Some("")), Paging::new(1, 100));
        assert_eq!(Paging::parse(Some("1.5"), Some("10x")), Paging::new(1, 100));
    }

    #[test]
    fn test_parse_passes_values_through() {
        assert_eq!(Paging::parse(Some("3"), Some("25")), Paging::new(3, 25));
        assert_eq!(Paging::parse(Some("-2"), Some("0")), Paging::new(-2, 0));
        assert_eq!(Paging::parse(Some("+4"), None), Paging::new(4, 100));
    }

    #[test]
    fn test_window() {
        assert_eq!(Paging::new(1, 100).window().unwrap(), (0, 100));
        assert_eq!(Paging::new(3, 25).window().unwrap(), (50, 25));
    }

    #[test]
    fn test_window_rejects_zero_size() {
        let err = Paging::new(1, 0).window().unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg.contains("size")));
    }

    #[test]
    fn test_window_rejects_non_positive_page() {
        assert!(matches!(
            Paging::new(0, 10).window(),
            Err(AppError::InvalidInput(msg)) if msg.contains("page")
        ));
        assert!(Paging::new(-5, 10).window().is_err());
    }

    #[test]
    fn test_window_rejects_overflow() {
        assert!(matches!(
            Paging::new(i64::MAX, 2).window(),
            Err(AppError::InvalidInput(msg)) if msg == "page out of range"
        ));
    }

    #[test]
    fn test_total_page() {
        let cases = [(0, 100, 1), (250, 100, 3), (100, 100, 2), (99, 100, 1), (3, 2, 2)];
        for (total_item, size, expected) in cases {
            let meta = PagingMeta::new(Paging::new(1, size), total_item);
            assert_eq!(meta.total_page, expected, "total={total_item} size={size}");
        }
    }

    #[test]
    fn test_paging_meta_json() {
        let page = Paginated::new(vec!["a"], Paging::new(1, 2), 3);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json["paging"],
            serde_json::json!({ "page": 1, "size": 2, "totalPage": 2, "totalItem": 3 })
        );
    }
}
