use serde::Serialize;

/// Page size used when the pagination control does not report one.
pub const FALLBACK_LIMIT: u32 = 2;

/// Page sizes offered by the pagination control.
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [2, 5, 7, 10, 12];

/// Parameters of the brand search endpoint.
///
/// Field order is the query string order: `search`, `page`, `limit`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct QueryParams {
    pub search: String,
    pub page: u32,
    pub limit: u32,
}

impl QueryParams {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            search: String::new(),
            page: 1,
            limit: if limit == 0 { FALLBACK_LIMIT } else { limit },
        }
    }

    /// Returns the params after a search edit. The page always goes back to 1.
    pub fn searched(&self, search: &str) -> Self {
        Self {
            search: search.to_string(),
            page: 1,
            limit: self.limit,
        }
    }

    /// Returns the params after a pagination-control event. A missing or zero
    /// page size becomes `default_limit`.
    pub fn paginated(&self, page: Option<u32>, page_size: Option<u32>, default_limit: u32) -> Self {
        let fallback = if default_limit == 0 { FALLBACK_LIMIT } else { default_limit };
        Self {
            search: self.search.clone(),
            page: page.filter(|p| *p > 0).unwrap_or(1),
            limit: page_size.filter(|s| *s > 0).unwrap_or(fallback),
        }
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::with_limit(FALLBACK_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(99)]
    fn search_resets_page(#[case] page: u32) {
        let params = QueryParams {
            search: "old".to_string(),
            page,
            limit: 5,
        };

        let next = params.searched("Nik");

        assert_eq!(next.page, 1);
        assert_eq!(next.search, "Nik");
        assert_eq!(next.limit, 5);
    }

    #[rstest]
    #[case(Some(3), Some(10), 3, 10)]
    #[case(Some(3), None, 3, FALLBACK_LIMIT)]
    #[case(None, Some(7), 1, 7)]
    #[case(Some(0), Some(0), 1, FALLBACK_LIMIT)]
    fn pagination_defaults(
        #[case] page: Option<u32>,
        #[case] size: Option<u32>,
        #[case] want_page: u32,
        #[case] want_limit: u32,
    ) {
        let next = QueryParams::default().paginated(page, size, FALLBACK_LIMIT);

        assert_eq!((next.page, next.limit), (want_page, want_limit));
    }

    #[rstest]
    #[case(None, 7)]
    #[case(Some(0), 7)]
    #[case(Some(12), 12)]
    fn missing_page_size_uses_the_given_default(#[case] size: Option<u32>, #[case] want: u32) {
        let next = QueryParams::with_limit(5).paginated(Some(2), size, 7);

        assert_eq!((next.page, next.limit), (2, want));
    }

    #[rstest]
    fn zero_default_falls_back_to_two() {
        let next = QueryParams::default().paginated(None, None, 0);

        assert_eq!(next.limit, FALLBACK_LIMIT);
    }

    #[rstest]
    fn zero_limit_is_never_stored() {
        assert_eq!(QueryParams::with_limit(0).limit, FALLBACK_LIMIT);
    }
}
