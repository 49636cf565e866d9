//! Route discovery over the page tree.
//!
//! A directory is a route when it directly contains a page marker file
//! (`page.tsx` and friends). Discovery is read-only and best-effort: a missing
//! root yields no routes, an unreadable subdirectory is skipped with a warning.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Discovered routes (`/`, `/about`, ...) mapped to the marker file that defines each one.
pub type RouteMap = BTreeMap<String, PathBuf>;

/// Lists a directory, or returns `None` if it does not exist or cannot be read.
pub fn try_list_directory(path: &Path) -> Option<fs::ReadDir> {
    fs::read_dir(path).ok()
}

/// Walks `root` and returns every directory that directly contains one of `markers`.
///
/// Routes are relative to `root`, `/`-separated, and `/` for `root` itself.
/// Dynamic segments (`[slug]`), private folders (`_components`), parallel
/// route slots (`@modal`) and hidden folders are not descended into; route
/// groups (`(marketing)`) are dropped from the route path. Symlinked
/// directories are followed, and a dangling link is skipped with a warning.
pub fn discover_routes(root: &Path, markers: &[String]) -> RouteMap {
    let mut routes = RouteMap::new();

    if try_list_directory(root).is_none() {
        debug!(root = %root.display(), "route root not present, nothing to discover");
        return routes;
    }

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_type().is_dir() || is_routable(e.file_name()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(
                    path = %err.path().map(|p| p.display().to_string()).unwrap_or_default(),
                    error = %err,
                    "skipping unreadable entry during route discovery"
                );
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_marker(entry.file_name(), markers) {
            continue;
        }
        let Some(dir) = entry.path().parent() else {
            continue;
        };
        if let Some(route) = route_for(root, dir) {
            routes
                .entry(route)
                .or_insert_with(|| entry.path().to_path_buf());
        }
    }

    routes
}

fn is_marker(name: &OsStr, markers: &[String]) -> bool {
    name.to_str()
        .map(|n| markers.iter().any(|m| m == n))
        .unwrap_or(false)
}

/// Dynamic, private, slot and hidden segments never map to a literal URL.
fn is_routable(name: &OsStr) -> bool {
    match name.to_str() {
        Some(n) => !n.starts_with(['[', '_', '.', '@']),
        None => false,
    }
}

fn is_route_group(segment: &str) -> bool {
    segment.starts_with('(') && segment.ends_with(')')
}

/// Converts a directory under `root` to its route string.
fn route_for(root: &Path, dir: &Path) -> Option<String> {
    let relative = dir.strip_prefix(root).ok()?;
    let mut segments = Vec::new();
    for component in relative.components() {
        let Component::Normal(part) = component else {
            continue;
        };
        let Some(segment) = part.to_str() else {
            warn!(dir = %dir.display(), "skipping route with non UTF-8 path");
            return None;
        };
        if !is_route_group(segment) {
            segments.push(segment);
        }
    }
    Some(format!("/{}", segments.join("/")))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn markers() -> Vec<String> {
        vec!["page.tsx".to_string(), "page.mdx".to_string()]
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export default function Page() {}").unwrap();
    }

    fn routes(root: &Path) -> Vec<String> {
        discover_routes(root, &markers()).into_keys().collect()
    }

    #[test]
    fn missing_root_yields_no_routes() {
        let dir = tempfile::tempdir().unwrap();
        assert!(routes(&dir.path().join("countries")).is_empty());
    }

    #[test]
    fn finds_root_and_nested_routes_at_any_depth() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "page.tsx");
        touch(dir.path(), "about/page.tsx");
        touch(dir.path(), "services/technical/deep/nested/page.mdx");
        fs::create_dir_all(dir.path().join("contact")).unwrap();
        touch(dir.path(), "contact/layout.tsx");

        assert_eq!(
            routes(dir.path()),
            vec!["/", "/about", "/services/technical/deep/nested"]
        );
    }

    #[test]
    fn skips_dynamic_private_and_hidden_segments() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "blog/[slug]/page.tsx");
        touch(dir.path(), "_components/page.tsx");
        touch(dir.path(), ".next/server/page.tsx");
        touch(dir.path(), "blog/page.tsx");

        assert_eq!(routes(dir.path()), vec!["/blog"]);
    }

    #[test]
    fn parallel_route_slots_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "@modal/login/page.tsx");
        touch(dir.path(), "dashboard/@analytics/page.tsx");
        touch(dir.path(), "dashboard/page.tsx");

        assert_eq!(routes(dir.path()), vec!["/dashboard"]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_skipped_and_walk_continues() {
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("broken")).unwrap();
        touch(dir.path(), "about/page.tsx");
        touch(dir.path(), "contact/page.tsx");

        assert_eq!(routes(dir.path()), vec!["/about", "/contact"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_followed() {
        let dir = tempfile::tempdir().unwrap();
        let shared = tempfile::tempdir().unwrap();
        touch(shared.path(), "page.tsx");
        std::os::unix::fs::symlink(shared.path(), dir.path().join("legal")).unwrap();

        assert_eq!(routes(dir.path()), vec!["/legal"]);
    }

    #[test]
    fn route_groups_are_transparent() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "(marketing)/pricing/page.tsx");
        touch(dir.path(), "(marketing)/page.tsx");

        assert_eq!(routes(dir.path()), vec!["/", "/pricing"]);
    }

    #[test]
    fn multiple_markers_in_one_directory_yield_one_route() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "about/page.tsx");
        touch(dir.path(), "about/page.mdx");

        let found = discover_routes(dir.path(), &markers());
        assert_eq!(found.len(), 1);
        assert!(found["/about"].ends_with("about/page.mdx") || found["/about"].ends_with("about/page.tsx"));
    }
}
