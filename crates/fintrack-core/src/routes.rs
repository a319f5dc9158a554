//! Dashboard route table and history-style navigation.
//!
//! The table is static: six paths, each mapped to one top-level view. There are
//! no dynamic segments, guards, nested routes or redirects. Matching follows
//! the usual history-mode router defaults:
//! - query string and hash fragment are ignored
//! - one trailing slash is optional
//! - matching is case-insensitive
//!
//! Paths outside the table resolve to [`Resolution::NotFound`].

use std::fmt;
use tracing::debug;

/// Top-level dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Categories,
    Transaction,
    Debts,
    Wishlist,
    Invesment,
}

impl View {
    /// Route name of this view.
    pub fn name(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Categories => "Categories",
            View::Transaction => "Transaction",
            View::Debts => "Debts",
            View::Wishlist => "Wishlist",
            View::Invesment => "Invesment",
        }
    }

    /// Path this view is mounted at.
    pub fn path(&self) -> &'static str {
        match self {
            View::Dashboard => "/",
            View::Categories => "/categories",
            View::Transaction => "/transaction",
            View::Debts => "/debts",
            View::Wishlist => "/wishlists",
            View::Invesment => "/invesments",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

impl Route {
    const fn new(view: View, path: &'static str, name: &'static str) -> Self {
        Self { path, name, view }
    }
}

/// The route table, in declaration order.
pub static ROUTES: [Route; 6] = [
    Route::new(View::Dashboard, "/", "Dashboard"),
    Route::new(View::Categories, "/categories", "Categories"),
    Route::new(View::Transaction, "/transaction", "Transaction"),
    Route::new(View::Debts, "/debts", "Debts"),
    Route::new(View::Wishlist, "/wishlists", "Wishlist"),
    Route::new(View::Invesment, "/invesments", "Invesment"),
];

/// Outcome of matching a location against [`ROUTES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(&'static Route),
    NotFound { path: String },
}

impl Resolution {
    pub fn view(&self) -> Option<View> {
        match self {
            Resolution::Matched(route) => Some(route.view),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }
}

/// Match a location (path, optionally with query and hash) against the table.
pub fn resolve(location: &str) -> Resolution {
    let path = normalize_path(location);
    ROUTES
        .iter()
        .find(|route| route.path.eq_ignore_ascii_case(&path))
        .map(Resolution::Matched)
        .unwrap_or(Resolution::NotFound { path })
}

/// Look a route up by its name.
pub fn by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.name == name)
}

/// Reduce a location to the path part used for matching.
fn normalize_path(location: &str) -> String {
    let path = location.split(&['#', '?'][..]).next().unwrap_or_default();
    let path = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Browser-style navigation history over the route table.
///
/// Starts at `/`. `push` discards any forward entries, like a browser does
/// after navigating from a point reached with `back`.
#[derive(Debug, Clone)]
pub struct HistoryRouter {
    entries: Vec<String>,
    index: usize,
}

impl HistoryRouter {
    pub fn new() -> Self {
        Self {
            entries: vec!["/".to_string()],
            index: 0,
        }
    }

    /// Navigate to `location`, adding a history entry.
    ///
    /// Navigating to the current location again is a no-op.
    pub fn push(&mut self, location: &str) -> Resolution {
        if self.current_location() == location {
            debug!("Ignoring duplicate navigation to {}", location);
            return self.current();
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(location.to_string());
        self.index += 1;
        debug!("Navigated to {}", location);
        self.current()
    }

    /// Navigate to `location`, replacing the current history entry.
    pub fn replace(&mut self, location: &str) -> Resolution {
        self.entries[self.index] = location.to_string();
        debug!("Replaced current location with {}", location);
        self.current()
    }

    /// Step back one entry. Returns `None` at the start of history.
    pub fn back(&mut self) -> Option<Resolution> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        debug!("Back to {}", self.current_location());
        Some(self.current())
    }

    /// Step forward one entry. Returns `None` at the end of history.
    pub fn forward(&mut self) -> Option<Resolution> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        debug!("Forward to {}", self.current_location());
        Some(self.current())
    }

    /// The location of the current entry, as it was navigated to.
    pub fn current_location(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn current(&self) -> Resolution {
        resolve(self.current_location())
    }

    /// Number of history entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new()
    }
}
