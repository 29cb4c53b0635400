//! Paths of the brand REST resource, relative to the configured base URL.

use crate::model::brand::BrandId;
use crate::model::query::QueryParams;

pub const SEARCH_PATH: &str = "/brand/search";
pub const CREATE_PATH: &str = "/brand/create";

pub fn search_url(base: &str, query: &QueryParams) -> String {
    // Three scalar fields always encode.
    let qs = serde_urlencoded::to_string(query).unwrap_or_default();
    format!("{}{}?{}", trim_base(base), SEARCH_PATH, qs)
}

pub fn create_url(base: &str) -> String {
    format!("{}{}", trim_base(base), CREATE_PATH)
}

pub fn update_url(base: &str, id: BrandId) -> String {
    format!("{}/brand/update/{}", trim_base(base), id)
}

pub fn delete_url(base: &str, id: BrandId) -> String {
    format!("{}/brand/delete/{}", trim_base(base), id)
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn search_query_order_is_search_page_limit() {
        let query = QueryParams::default().searched("Nik");

        assert_eq!(search_url("", &query), "/brand/search?search=Nik&page=1&limit=2");
    }

    #[rstest]
    fn search_text_is_form_encoded() {
        let query = QueryParams::default().searched("Dolce & Gabbana");

        assert_eq!(
            search_url("https://api.example.com/", &query),
            "https://api.example.com/brand/search?search=Dolce+%26+Gabbana&page=1&limit=2"
        );
    }

    #[rstest]
    #[case("/api", "/api/brand/delete/7")]
    #[case("/api/", "/api/brand/delete/7")]
    #[case("", "/brand/delete/7")]
    fn delete_path_carries_id(#[case] base: &str, #[case] expected: &str) {
        assert_eq!(delete_url(base, 7), expected);
    }

    #[rstest]
    fn update_and_create_paths() {
        assert_eq!(update_url("/api", 12), "/api/brand/update/12");
        assert_eq!(create_url("/api"), "/api/brand/create");
    }
}
