//! Hot reload marker
//!
//! While the bundler's dev server runs it writes its base URL into a marker
//! file (`dist/hot` by default). Its presence switches resolution to serve
//! every asset from that URL.

use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Read the marker file. `None` when the file does not exist or cannot be
/// read; otherwise the trimmed contents.
pub fn read_hot_marker(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let base_url = contents.trim().to_string();
            debug!("Hot mode enabled, serving assets from '{}'", base_url);
            Some(base_url)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            warn!("Failed to read hot marker {}: {}", path.display(), e);
            None
        }
    }
}

/// Join the dev server base URL and a manifest entry with a single `/`
pub fn join_links(base_url: &str, path: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match (base_url.is_empty(), path.is_empty()) {
        (true, _) => format!("/{}", path),
        (false, true) => base_url.to_string(),
        (false, false) => format!("{}/{}", base_url, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_marker_contents_are_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  http://localhost:8080  ").unwrap();
        assert_eq!(
            read_hot_marker(file.path()),
            Some("http://localhost:8080".to_string())
        );
    }

    #[test]
    fn test_missing_marker_means_not_hot() {
        assert_eq!(read_hot_marker(Path::new("/nonexistent/dist/hot")), None);
    }

    #[test]
    fn test_join_links_single_slash() {
        assert_eq!(
            join_links("http://localhost:8080", "app.abc123.js"),
            "http://localhost:8080/app.abc123.js"
        );
        assert_eq!(
            join_links("http://localhost:8080/", "/js/app.js?id=1"),
            "http://localhost:8080/js/app.js?id=1"
        );
    }

    #[test]
    fn test_join_links_empty_parts() {
        assert_eq!(join_links("", "/js/app.js"), "/js/app.js");
        assert_eq!(join_links("http://localhost:8080", ""), "http://localhost:8080");
    }
}
