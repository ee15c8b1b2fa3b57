//! Download link construction.

use std::sync::LazyLock;

use regex::Regex;

/// Names the download route serves unchanged: word characters, dots,
/// dashes, spaces.
static DOWNLOADABLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.\- ]+$").expect("download name pattern is valid")
});

/// Build the download URL for a file: `prefix` + url-encoded name.
pub fn download_url(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, urlencoding::encode(name))
}

/// Check whether `name` stays within the characters the download route
/// serves unchanged.
fn is_plain_name(name: &str) -> bool {
    DOWNLOADABLE_NAME.is_match(name)
}

/// Tooltip for a download link. Every file gets a link; names outside the
/// plain set carry a warning that the server may refuse them.
pub fn download_hint(name: &str) -> String {
    if is_plain_name(name) {
        format!("Download {}", name)
    } else {
        format!("Download {} (the server may refuse this name)", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url_encodes_name() {
        assert_eq!(download_url("/download/", "a.txt"), "/download/a.txt");
        assert_eq!(
            download_url("/download/", "my report.pdf"),
            "/download/my%20report.pdf"
        );
        assert_eq!(
            download_url("/download/", "été#1.txt"),
            "/download/%C3%A9t%C3%A9%231.txt"
        );
    }

    #[test]
    fn test_is_plain_name() {
        assert!(is_plain_name("report-2024 final.pdf"));
        assert!(is_plain_name("été_1.txt"));
        assert!(!is_plain_name("a/b.txt"));
        assert!(!is_plain_name("what?.txt"));
        assert!(!is_plain_name(""));
    }

    #[test]
    fn test_unusual_names_still_get_a_download_url() {
        for name in ["photo (1).jpg", "notes+draft.txt", "a&b.pdf"] {
            let url = download_url("/download/", name);
            assert!(url.starts_with("/download/"), "{}", url);
            assert_eq!(urlencoding::decode(&url["/download/".len()..]).unwrap(), name);
            assert!(download_hint(name).contains("may refuse"));
        }
        assert_eq!(download_url("/download/", "photo (1).jpg"), "/download/photo%20%281%29.jpg");
        assert_eq!(download_hint("a.txt"), "Download a.txt");
    }
}
