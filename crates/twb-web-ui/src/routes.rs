//! Static route table
//!
//! Built once; the router and the navigation bar both read from it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// Absolute browser path
    pub path: &'static str,
    pub title: &'static str,
    /// Path of the enclosing route, if nested
    pub parent: Option<&'static str>,
}

impl RouteEntry {
    /// Path relative to the parent route, as the nested router expects it.
    pub fn segment(&self) -> &'static str {
        match self.parent {
            Some(parent) => self
                .path
                .strip_prefix(parent)
                .unwrap_or(self.path)
                .trim_start_matches('/'),
            None => self.path,
        }
    }
}

pub const SHELL: RouteEntry = RouteEntry {
    path: "/",
    title: "Home",
    parent: None,
};

pub const CONFIG: RouteEntry = RouteEntry {
    path: "/config",
    title: "Config",
    parent: Some("/"),
};

pub const ROUTES: &[RouteEntry] = &[SHELL, CONFIG];

/// Routes nested under the shell, in navigation order.
pub fn nav_routes() -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES.iter().filter(|route| route.parent == Some(SHELL.path))
}
