//! Defines the properties for the `BrandPage`.

use common::config::AdminConfig;
use yew::prelude::*;

/// Properties for the `BrandPage`.
///
/// The configuration is read once, when the page is created: the base URL and
/// token key go into the HTTP service and the default page size seeds the
/// first list request.
#[derive(Properties, PartialEq, Clone)]
pub struct BrandPageProps {
    #[prop_or_default]
    pub config: AdminConfig,
}
