//! Input lines to favicon fetch targets.
//!
//! Each non-blank line is trimmed and suffixed with `/favicon.ico`. No URL
//! validation happens here; a malformed URL surfaces later as a fetch failure.

use std::io::{self, BufRead};

/// Path appended to every base URL.
pub const FAVICON_PATH: &str = "/favicon.ico";

/// One favicon to fetch. `index` is the position among non-blank input lines
/// and doubles as the outcome slot the dispatcher writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    pub index: usize,
    pub url: String,
}

/// Turns one raw input line into a favicon URL, or `None` for a blank line.
///
/// - `normalize_line("http://a.com")` → `"http://a.com/favicon.ico"`
/// - `normalize_line("http://b.com/")` → `"http://b.com/favicon.ico"`
pub fn normalize_line(line: &str) -> Option<String> {
    let url = line.trim();
    if url.is_empty() {
        return None;
    }
    if url.ends_with('/') {
        Some(format!("{}favicon.ico", url))
    } else {
        Some(format!("{}{}", url, FAVICON_PATH))
    }
}

/// Builds the ordered target list from already-split lines.
pub fn targets_from_lines<I, S>(lines: I) -> Vec<FetchTarget>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| normalize_line(line.as_ref()))
        .enumerate()
        .map(|(index, url)| FetchTarget { index, url })
        .collect()
}

/// Reads newline-delimited URLs (e.g. stdin) into fetch targets.
///
/// Lines are taken as raw bytes; invalid UTF-8 is replaced rather than
/// rejected, so a garbled line becomes a target that fails on its own fetch.
pub fn read_targets<R: BufRead>(reader: R) -> io::Result<Vec<FetchTarget>> {
    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        lines.push(String::from_utf8_lossy(&line?).into_owned());
    }
    Ok(targets_from_lines(lines))
}

/// Strips the favicon suffix to recover the base URL reported to the user.
pub fn base_url(url: &str) -> &str {
    url.strip_suffix(FAVICON_PATH).unwrap_or(url)
}
