//! Route table.
//!
//! The site is a single page. It answers on `/` and on the deployment base
//! path (with or without a trailing slash); everything else, `/404` included,
//! is the not-found page. Query strings and fragments never affect routing.

/// A resolved route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    NotFound,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::NotFound => "not-found",
        }
    }

    /// Generated file serving this route, relative to the site root.
    pub fn output_file(self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::NotFound => NOT_FOUND_FILE,
        }
    }
}

/// Resolve a request path against the route table.
pub fn resolve(path: &str, base_path: &str) -> Route {
    let path = strip_query_and_fragment(path);
    let base = base_path.trim_end_matches('/');

    if path == "/" || path.is_empty() {
        return Route::Home;
    }
    if !base.is_empty() && (path == base || path.strip_prefix(base) == Some("/")) {
        return Route::Home;
    }
    Route::NotFound
}

/// Output files (relative to the site root) the home route is written to.
///
/// `/` maps to `index.html`; the base-path alias maps to `<base>/index.html`
/// so static hosts serve the page under both URLs.
pub fn home_files(base_path: &str) -> Vec<String> {
    let mut files = vec!["index.html".to_string()];
    let base = base_path.trim_matches('/');
    if !base.is_empty() {
        files.push(format!("{base}/index.html"));
    }
    files
}

/// Output file of the not-found page. Static hosts serve it for unknown paths.
pub const NOT_FOUND_FILE: &str = "404.html";

fn strip_query_and_fragment(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
