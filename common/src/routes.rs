//! Navigable paths of the admin application.

/// Entry of the admin navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminLink {
    pub content: &'static str,
    pub path: &'static str,
}

pub const ADMIN_LINKS: [AdminLink; 2] = [
    AdminLink {
        content: "Categories",
        path: "/admin/categories",
    },
    AdminLink {
        content: "Brand",
        path: "/admin/brand",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    SignIn,
    SignUp,
    Categories,
    Brand,
    NotFound,
}

impl AppRoute {
    /// Matches a location pathname. Query strings, fragments and trailing
    /// slashes are ignored.
    pub fn recognize(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "" => AppRoute::SignIn,
            "/sign-up" => AppRoute::SignUp,
            "/admin/categories" => AppRoute::Categories,
            "/admin/brand" => AppRoute::Brand,
            _ => AppRoute::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::SignIn => "/",
            AppRoute::SignUp => "/sign-up",
            AppRoute::Categories => "/admin/categories",
            AppRoute::Brand => "/admin/brand",
            AppRoute::NotFound => "/404",
        }
    }

    /// Routes rendered inside the admin layout.
    pub fn is_admin(&self) -> bool {
        matches!(self, AppRoute::Categories | AppRoute::Brand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", AppRoute::SignIn)]
    #[case("", AppRoute::SignIn)]
    #[case("/sign-up", AppRoute::SignUp)]
    #[case("/admin/categories/", AppRoute::Categories)]
    #[case("/admin/brand", AppRoute::Brand)]
    #[case("/admin/brand?page=2", AppRoute::Brand)]
    #[case("/admin/brand#top", AppRoute::Brand)]
    #[case("/admin", AppRoute::NotFound)]
    #[case("/admin/brands", AppRoute::NotFound)]
    fn recognizes_paths(#[case] path: &str, #[case] expected: AppRoute) {
        assert_eq!(AppRoute::recognize(path), expected);
    }

    #[rstest]
    fn every_admin_link_resolves_to_an_admin_route() {
        for link in ADMIN_LINKS {
            let route = AppRoute::recognize(link.path);
            assert!(route.is_admin(), "{} did not resolve", link.path);
            assert_eq!(route.path(), link.path);
        }
    }
}
